//! # Console Configuration
//!
//! Loaded from environment variables at startup:
//!
//! | Variable                | Default                               |
//! |-------------------------|---------------------------------------|
//! | `CONSOLE_API_BASE_URL`  | `http://127.0.0.1:8080/api/v1`        |
//! | `CONSOLE_TIMEOUT_SECS`  | `10`                                  |
//! | `CONSOLE_STORAGE_PATH`  | `<config dir>/shopops/session.json`   |
//! | `CONSOLE_LOG_DIR`       | `logs`                                |
//! | `RUST_LOG`              | `console=info,warn`                   |

use std::path::PathBuf;
use std::time::Duration;

use lib_utils::envs::{self, get_env, get_env_or, get_env_parse};

use super::error::{ConsoleError, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "console=info,warn";

/// Console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend base URL including the `/api/v1` prefix, without trailing slash
    pub api_base_url: String,
    /// Fixed per-request deadline
    pub request_timeout: Duration,
    /// Session storage file; `None` keeps the session in memory only
    pub storage_path: Option<PathBuf>,
    /// Directory for rolling log files
    pub log_dir: PathBuf,
    /// Log filter (e.g. `console=debug,info`)
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            storage_path: default_storage_path(),
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_base_url = normalize_base_url(&get_env_or("CONSOLE_API_BASE_URL", DEFAULT_API_BASE_URL))?;

        let timeout_secs = match get_env_parse::<u64>("CONSOLE_TIMEOUT_SECS") {
            Ok(secs) if secs > 0 => secs,
            Ok(_) => {
                return Err(ConsoleError::Config(
                    "CONSOLE_TIMEOUT_SECS must be greater than 0".to_string(),
                ))
            }
            Err(envs::Error::MissingEnv(_)) => DEFAULT_TIMEOUT_SECS,
            Err(err) => return Err(err.into()),
        };

        let storage_path = get_env("CONSOLE_STORAGE_PATH")
            .map(PathBuf::from)
            .ok()
            .or_else(default_storage_path);

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            storage_path,
            log_dir: PathBuf::from(get_env_or("CONSOLE_LOG_DIR", "logs")),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
        })
    }

    /// Same configuration pointed at another backend.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.api_base_url = normalize_base_url(base_url)?;
        Ok(self)
    }
}

/// `<platform config dir>/shopops/session.json`
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shopops").join("session.json"))
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConsoleError::Config(format!(
            "API base URL must start with http:// or https://, got '{}'",
            raw
        )));
    }
    Ok(trimmed.to_string())
}
