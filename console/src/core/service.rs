//! # Service Traits
//!
//! Seams between the session store, the HTTP layer, the router and the
//! notification surface. Production wires them to [`crate::services::api::ApiClient`],
//! [`crate::router::Router`] and [`crate::notifications::NotificationCenter`];
//! tests substitute their own.

use async_trait::async_trait;
use shared::{LoginRequest, LoginResponse, ShopSummary};

use super::error::Result;

/// Authentication collaborator used by [`crate::session::SessionStore::login`].
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a token and identity.
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse>;
}

/// Source of the shops the current user may operate on.
#[async_trait]
pub trait ShopDirectory: Send + Sync {
    async fn accessible_shops(&self) -> Result<Vec<ShopSummary>>;
}

/// Something that can move the console to another route.
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Surface for transient user-visible messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);
}
