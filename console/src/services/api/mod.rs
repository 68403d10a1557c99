//! # Backend API Client Module
//!
//! HTTP client for the operations backend plus one module of endpoint
//! functions per backend resource. Every function takes the shared
//! [`ApiClient`] and returns the unwrapped `data` of the response envelope.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── client.rs             - ApiClient, envelope unwrapping, failure handling
//! ├── auth.rs               - login, token validation, current user
//! ├── user.rs               - users
//! ├── role.rs               - roles and their permissions
//! ├── permission.rs         - permissions
//! ├── menu.rs               - menus and menu trees
//! ├── shop.rs               - shops and webhooks
//! ├── user_shop.rs          - shops accessible to the current user
//! ├── order.rs              - orders
//! ├── tracking.rs           - tracking numbers
//! ├── stats.rs              - dashboard statistics
//! ├── alert_config.rs       - alert recipients and email monitors
//! ├── product.rs            - products, variants, procurement, CSV import/export
//! ├── product_visibility.rs - product visibility per shop
//! ├── product_publish.rs    - publishing products to shops
//! ├── theme.rs              - theme versions and migration
//! └── org_sync.rs           - organization sync with the IM directory
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! # async fn demo(client: &console::services::api::ApiClient) -> console::core::Result<()> {
//! use console::services::api::order;
//! use shared::OrderQuery;
//!
//! let page = order::list(client, &OrderQuery::default()).await?;
//! println!("{} orders", page.total);
//! # Ok(())
//! # }
//! ```

pub mod alert_config;
pub mod auth;
pub mod client;
pub mod menu;
pub mod order;
pub mod org_sync;
pub mod permission;
pub mod product;
pub mod product_publish;
pub mod product_visibility;
pub mod role;
pub mod shop;
pub mod stats;
pub mod theme;
pub mod tracking;
pub mod user;
pub mod user_shop;

pub use client::{Ack, ApiClient, FileUpload, REQUEST_ID_HEADER, SHOP_HEADER};

#[cfg(test)]
mod tests;
