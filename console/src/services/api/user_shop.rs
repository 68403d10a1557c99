//! # User-Shop Endpoints
//!
//! Which shops the current user may operate on, and with which roles.

use shared::ShopSummary;

use super::client::ApiClient;
use crate::core::error::Result;

/// Shops accessible to the current user.
#[tracing::instrument(skip(client))]
pub async fn my_shops(client: &ApiClient) -> Result<Vec<ShopSummary>> {
    let shops: Option<Vec<ShopSummary>> = client.get("/user-shops/list").await?;
    let shops = shops.unwrap_or_default();
    tracing::debug!(count = shops.len(), "Accessible shops fetched");
    Ok(shops)
}

/// Ids of the roles the current user holds in `shop_id`.
pub async fn my_roles_in_shop(client: &ApiClient, shop_id: i64) -> Result<Vec<i64>> {
    client.get(&format!("/user-shops/{}/roles", shop_id)).await
}

pub async fn check_access(client: &ApiClient, shop_id: i64) -> Result<bool> {
    client.get(&format!("/user-shops/{}/check-access", shop_id)).await
}
