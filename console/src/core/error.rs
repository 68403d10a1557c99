//! # Common Error Types
//!
//! Consolidated error handling for the console.
//!
//! Failures coming back from the backend are bucketed the way the operator
//! sees them:
//!
//! - **Unauthenticated** (401): the session expired; the caller is logged out
//!   and sent to the login route
//! - **Forbidden** (403): the user lacks the permission
//! - **Server** (500): backend failure
//! - **Failed**: any other non-success status or envelope code
//! - **Network**: the backend could not be reached or the deadline passed
//!
//! Local failures (decoding, storage, validation, configuration, routing)
//! have their own variants.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use console::core::error::{ConsoleError, Result};
//!
//! fn require_shop(shop_id: Option<i64>) -> Result<i64> {
//!     shop_id.ok_or_else(|| ConsoleError::Validation("Select a shop first".to_string()))
//! }
//! ```

use thiserror::Error;

/// Shown when the backend answers 401.
pub const MSG_SESSION_EXPIRED: &str = "Session expired, please log in again";
/// Shown when the backend answers 403.
pub const MSG_FORBIDDEN: &str = "You do not have permission to access this resource";
/// Shown when the backend answers 500.
pub const MSG_SERVER_ERROR: &str = "Server error";
/// Shown for other failures without a backend message.
pub const MSG_REQUEST_FAILED: &str = "Request failed";
/// Shown when no response arrived.
pub const MSG_NETWORK_ERROR: &str = "Network error, please check your connection";

/// Console-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// 401 from the backend, or a missing/expired token.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// 403 from the backend.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 500 from the backend.
    #[error("Server error: {0}")]
    Server(String),

    /// Any other non-success HTTP status or envelope code.
    #[error("Request failed ({code}): {message}")]
    Failed { code: i32, message: String },

    /// Connection refused, DNS failure, TLS failure or deadline exceeded.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a body we could not decode.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Local session storage failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input rejected before a request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid console configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not present in the route table.
    #[error("Route not found: {0}")]
    RouteNotFound(String),
}

/// Convenience type alias for `Result<T, ConsoleError>`.
pub type Result<T> = std::result::Result<T, ConsoleError>;

impl ConsoleError {
    /// Build the error for a failing HTTP status or envelope code.
    ///
    /// `message` is the backend's own message, used for the generic bucket.
    pub fn from_code(code: i32, message: Option<String>) -> Self {
        match code {
            401 => ConsoleError::Unauthenticated(message.unwrap_or_else(|| MSG_SESSION_EXPIRED.to_string())),
            403 => ConsoleError::Forbidden(message.unwrap_or_else(|| MSG_FORBIDDEN.to_string())),
            500 => ConsoleError::Server(message.unwrap_or_else(|| MSG_SERVER_ERROR.to_string())),
            _ => ConsoleError::Failed {
                code,
                message: message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| MSG_REQUEST_FAILED.to_string()),
            },
        }
    }

    /// Message shown to the operator in a notification.
    pub fn notice(&self) -> String {
        match self {
            ConsoleError::Unauthenticated(_) => MSG_SESSION_EXPIRED.to_string(),
            ConsoleError::Forbidden(_) => MSG_FORBIDDEN.to_string(),
            ConsoleError::Server(_) => MSG_SERVER_ERROR.to_string(),
            ConsoleError::Failed { message, .. } => message.clone(),
            ConsoleError::Network(_) => MSG_NETWORK_ERROR.to_string(),
            ConsoleError::Decode(_) => MSG_REQUEST_FAILED.to_string(),
            ConsoleError::Storage(msg)
            | ConsoleError::Validation(msg)
            | ConsoleError::Config(msg) => msg.clone(),
            ConsoleError::RouteNotFound(path) => format!("Page not found: {}", path),
        }
    }

    /// True for the only failure that forces a logout.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ConsoleError::Unauthenticated(_))
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ConsoleError::Network(format!("request timed out: {}", err))
        } else if err.is_decode() {
            ConsoleError::Decode(err.to_string())
        } else {
            ConsoleError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::Decode(err.to_string())
    }
}

impl From<lib_utils::envs::Error> for ConsoleError {
    fn from(err: lib_utils::envs::Error) -> Self {
        ConsoleError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_buckets() {
        assert!(ConsoleError::from_code(401, None).is_unauthenticated());
        assert!(matches!(ConsoleError::from_code(403, None), ConsoleError::Forbidden(_)));
        assert!(matches!(ConsoleError::from_code(500, None), ConsoleError::Server(_)));
        assert_eq!(
            ConsoleError::from_code(404, Some("Shop not found".to_string())),
            ConsoleError::Failed {
                code: 404,
                message: "Shop not found".to_string()
            }
        );
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(ConsoleError::from_code(401, Some("jwt expired".into())).notice(), MSG_SESSION_EXPIRED);
        assert_eq!(ConsoleError::from_code(403, None).notice(), MSG_FORBIDDEN);
        assert_eq!(ConsoleError::from_code(500, Some("NPE".into())).notice(), MSG_SERVER_ERROR);
        assert_eq!(ConsoleError::from_code(400, Some("  ".into())).notice(), MSG_REQUEST_FAILED);
        assert_eq!(ConsoleError::Network("refused".into()).notice(), MSG_NETWORK_ERROR);
    }

    #[test]
    fn test_display() {
        let err = ConsoleError::Failed {
            code: 409,
            message: "Tracking number exists".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (409): Tracking number exists");
    }
}
