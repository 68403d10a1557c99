//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the backend REST API.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Response envelope and paged results
//! - [`auth`] - Login and current-user DTOs
//! - [`user`] - User management
//! - [`rbac`] - Roles, permissions and menus
//! - [`shop`] - Shops, webhooks and user-shop access
//! - [`order`] - Orders
//! - [`tracking`] - Shipment tracking
//! - [`product`] - Products, procurement, visibility and publishing
//! - [`theme`] - Theme versions and migration
//! - [`alert`] - Alert recipients and email monitors
//! - [`stats`] - Dashboard statistics
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v1/auth/login
//! Content-Type: application/json
//!
//! {"username": "alice", "password": "MyPassword123!"}
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "code": 200,
//!   "message": "success",
//!   "data": {
//!     "token": "eyJhbGciOiJIUzI1NiJ9...",
//!     "username": "alice",
//!     "realName": "Alice Zhang",
//!     "permissions": ["order:view", "shop:view"]
//!   },
//!   "timestamp": 1714552200000
//! }
//! ```

pub mod alert;
pub mod auth;
pub mod envelope;
pub mod order;
pub mod product;
pub mod rbac;
pub mod shop;
pub mod stats;
pub mod theme;
pub mod tracking;
pub mod user;

pub use alert::*;
pub use auth::*;
pub use envelope::*;
pub use order::*;
pub use product::*;
pub use rbac::*;
pub use shop::*;
pub use stats::*;
pub use theme::*;
pub use tracking::*;
pub use user::*;
