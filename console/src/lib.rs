//! # Shop Operations Console - Library Root
//!
//! Client side of the e-commerce operations platform: shop connections,
//! order and tracking sync, product listing / procurement / visibility /
//! publishing, user / role / permission / menu management, alert settings,
//! organization sync and the theme-migration wizard.
//!
//! The backend is a REST service reached over HTTP; this crate holds the
//! session, the HTTP layer, the route table with its guard, and the static
//! configuration of the organization diagram.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                console (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  app            - Console context (init / shutdown)    │
//! │  session        - token, identity, permissions, shop   │
//! │  storage        - persisted session fields             │
//! │  router         - route table + navigation guard       │
//! │  services::api  - HTTP client + endpoint modules       │
//! │  notifications  - operator notices                     │
//! │  diagram        - org graph node/edge config           │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (Bearer token, X-Shop-Id)
//!          ▼
//! ┌─────────────────────────────┐
//! │  Operations backend /api/v1 │
//! └─────────────────────────────┘
//! ```
//!
//! ## Module Dependency Graph
//!
//! ```text
//! app
//!   ├── services::api ──► session ──► storage
//!   │        ├──► router (redirect on 401)
//!   │        └──► notifications
//!   └── router ──► session
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use console::{Console, ConsoleConfig};
//!
//! # async fn demo() -> console::core::Result<()> {
//! let console = Console::init(ConsoleConfig::from_env()?)?;
//! console.login("alice", "secret").await?;
//! let stats = console::services::api::stats::dashboard(console.api()).await?;
//! println!("{} orders today", stats.today_orders);
//! console.shutdown();
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod diagram;
pub mod notifications;
pub mod router;
pub mod services;
pub mod session;
pub mod storage;

pub use app::Console;
pub use crate::core::{ConsoleConfig, ConsoleError, Result};
