//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the operations console and the
//! backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{code, data, message}` wrapper and paged results
//!   - **[`dto::auth`]**: Login, token validation and current-user DTOs
//!   - **[`dto::user`]**, **[`dto::rbac`]**: Users, roles, permissions and menus
//!   - **[`dto::shop`]**: Shops, webhooks and accessible-shop summaries
//!   - **[`dto::order`]**, **[`dto::tracking`]**: Orders and shipment tracking
//!   - **[`dto::product`]**: Listing, procurement, visibility and publishing
//!   - **[`dto::theme`]**: Theme versions and the migration wizard
//!   - **[`dto::alert`]**, **[`dto::stats`]**: Alert configuration and dashboard stats
//! - **[`utils`]**: Shared display helpers
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so every struct carries
//! `#[serde(rename_all = "camelCase")]`. Optional fields are omitted when `None`.
//! Timestamps are zone-less ISO-8601 (`2024-05-01T08:30:00`) and map to
//! [`chrono::NaiveDateTime`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::envelope::ApiEnvelope;
//! use shared::dto::auth::LoginResponse;
//!
//! let body = r#"{"code":200,"message":"success","data":{"token":"t","username":"alice"}}"#;
//! let envelope: ApiEnvelope<LoginResponse> = serde_json::from_str(body).unwrap();
//! assert!(envelope.is_success());
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
