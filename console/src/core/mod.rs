//! # Core Abstractions
//!
//! Error types, configuration and the collaborator traits used throughout the console.
//!
//! ## Modules
//!
//! - **[`error`]**: Console error type (`ConsoleError`, `Result<T>`) and user-facing messages
//! - **[`config`]**: `ConsoleConfig` loaded from the environment
//! - **[`service`]**: Collaborator traits (`AuthService`, `ShopDirectory`, `Navigator`, `Notifier`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use console::core::service::Navigator;
//!
//! struct Recorder;
//! impl Navigator for Recorder {
//!     fn redirect(&self, path: &str) {
//!         println!("-> {}", path);
//!     }
//! }
//!
//! let navigator: Arc<dyn Navigator> = Arc::new(Recorder);
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::ConsoleConfig;
pub use error::{ConsoleError, Result};
pub use service::{AuthService, Navigator, NoticeLevel, Notifier, ShopDirectory};
