use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand};

use console::core::error::{ConsoleError, Result};
use console::diagram::{self, NodeKind};
use console::services::api::stats;
use console::{Console, ConsoleConfig};

#[derive(Debug, Parser)]
#[command(name = "shopops", about = "Shop operations console", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Backend base URL including the API prefix
    #[arg(long, value_name = "URL", env = "CONSOLE_API_BASE_URL")]
    api_base_url: Option<String>,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log in and remember the session
    ///
    /// The password comes from `--password`, `SHOPOPS_PASSWORD`, or a line
    /// piped on stdin. It is never prompted for on a terminal, where it would echo.
    #[command(arg_required_else_help = true)]
    Login {
        username: String,
        #[arg(long, env = "SHOPOPS_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the session
    Logout,
    /// Show who is logged in and the selected shop
    Status,
    /// List the shops you may operate on
    Shops,
    /// Select a shop by id, or `none` to clear the selection
    #[command(arg_required_else_help = true)]
    UseShop { shop: String },
    /// Navigate to a console route
    #[command(arg_required_else_help = true)]
    Open { path: String },
    /// Dashboard figures
    Dashboard,
    /// Print the org diagram styles as JSON
    Diagram,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let console = match Console::init(config) {
        Ok(console) => console,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&console, cli.command).await;

    let notices = console.notifications().drain();
    for notice in &notices {
        eprintln!("{}", notice.render());
    }
    console.shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if notices.is_empty() {
                eprintln!("error: {}", e.notice());
            }
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> Result<ConsoleConfig> {
    let mut config = ConsoleConfig::from_env()?;
    if let Some(url) = &cli.api_base_url {
        config = config.with_base_url(url)?;
    }
    match cli.verbose {
        0 => {}
        1 => config.log_level = "console=debug,info".to_string(),
        _ => config.log_level = "console=trace,debug".to_string(),
    }
    Ok(config)
}

async fn run(console: &Console, command: Commands) -> Result<()> {
    match command {
        Commands::Login { username, password } => {
            let password = match password {
                Some(password) => password,
                None => read_password()?,
            };
            let session = console.login(&username, &password).await?;
            println!("Logged in as {}", session.display_name);
            print_shops(console);
        }
        Commands::Logout => {
            console.logout()?;
            println!("Logged out");
        }
        Commands::Status => print_status(console),
        Commands::Shops => {
            console.refresh_shops().await?;
            print_shops(console);
        }
        Commands::UseShop { shop } => {
            let shop_id = if shop.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(
                    shop.parse::<i64>()
                        .map_err(|_| ConsoleError::Validation(format!("'{}' is not a shop id", shop)))?,
                )
            };
            match console.switch_shop(shop_id).await? {
                Some(shop) => println!("Using shop #{} {}", shop.id, shop.shop_name),
                None => println!("No shop selected"),
            }
        }
        Commands::Open { path } => {
            let route = console.open(&path)?;
            println!("{} ({})", route.meta.title, route.path);
        }
        Commands::Dashboard => {
            let route = console.open("/dashboard")?;
            if route.path != "/dashboard" {
                return Err(ConsoleError::Validation("Log in first".to_string()));
            }
            let stats = stats::dashboard(console.api()).await?;
            println!(
                "Shops:   {} active / {} total",
                stats.active_shops, stats.total_shops
            );
            println!("Orders:  {} today / {} total", stats.today_orders, stats.total_orders);
            println!("Revenue: {:.2} today / {:.2} total", stats.today_revenue, stats.total_revenue);
            println!("Alerts:  {} pending", stats.pending_alerts);
            for shop in &stats.shops {
                println!(
                    "  #{:<5} {:<30} {:>6} orders {:>12.2}",
                    shop.id, shop.shop_name, shop.order_count, shop.revenue
                );
            }
        }
        Commands::Diagram => {
            let nodes: serde_json::Map<String, serde_json::Value> = NodeKind::ALL
                .iter()
                .map(|kind| {
                    let value = serde_json::json!({
                        "config": kind.config(),
                        "style": diagram::node_style(*kind),
                        "connectsTo": kind.allowed_targets(),
                    });
                    (kind.to_string(), value)
                })
                .collect();
            let doc = serde_json::json!({ "nodes": nodes, "edge": diagram::edge_config() });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn print_status(console: &Console) {
    let session = console.session().snapshot();
    if !session.is_logged_in() {
        println!("Not logged in");
        return;
    }

    println!("User:        {} ({})", session.display_name, session.username);
    if let Some(token) = session.token.as_deref() {
        let expiry = match lib_utils::token_expiry(token) {
            Ok(Some(at)) => {
                let at = at.with_timezone(&Local).naive_local();
                lib_utils::from_now(Some(at), Local::now().naive_local())
            }
            Ok(None) => "no expiry".to_string(),
            Err(_) => "unknown".to_string(),
        };
        println!("Token:       {} (expires {})", shared::mask_token(token), expiry);
    }
    println!(
        "Permissions: {}",
        if session.permissions.is_empty() {
            "-".to_string()
        } else {
            session.permissions.join(", ")
        }
    );
    match session.current_shop_id {
        Some(id) => println!("Shop:        #{}", id),
        None => println!("Shop:        none selected"),
    }
}

fn print_shops(console: &Console) {
    let current = console.session().current_shop_id();
    let shops = console.session().accessible_shops();
    if shops.is_empty() {
        println!("No accessible shops");
        return;
    }
    for shop in shops {
        let marker = if Some(shop.id) == current { '*' } else { ' ' };
        println!(
            "{} #{:<5} {:<30} {}",
            marker,
            shop.id,
            shop.shop_name,
            shop.shop_domain.as_deref().unwrap_or("-")
        );
    }
}

fn read_password() -> Result<String> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    password_from(stdin.lock(), interactive)
}

/// First line of `input`, refused when it is an echoing terminal.
fn password_from(mut input: impl BufRead, interactive: bool) -> Result<String> {
    if interactive {
        return Err(ConsoleError::Validation(
            "Password required: pass --password, set SHOPOPS_PASSWORD or pipe it on stdin".to_string(),
        ));
    }

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| ConsoleError::Validation(format!("cannot read password: {}", e)))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_read_from_pipe() {
        let password = password_from(&b"s3cret\r\nignored\n"[..], false).unwrap();
        assert_eq!(password, "s3cret");
    }

    #[test]
    fn test_password_never_read_from_terminal() {
        let err = password_from(&b"s3cret\n"[..], true).unwrap_err();
        assert!(matches!(err, ConsoleError::Validation(_)));
        assert!(err.notice().contains("SHOPOPS_PASSWORD"));
    }
}
