//! # Logging
//!
//! Structured logging for the console: a daily-rotated file under the
//! configured log directory plus warnings on stderr.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use console::core::ConsoleConfig;
//!
//! let config = ConsoleConfig::from_env().unwrap_or_default();
//! let _guard = console::debug::init(&config);
//!
//! tracing::info!(endpoint = "/shops", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! - `RUST_LOG`: Log level filter (e.g., `console=debug,info`)
//! - `CONSOLE_LOG_DIR`: Log directory (default: `logs`)

pub mod logger;

pub use logger::init;
