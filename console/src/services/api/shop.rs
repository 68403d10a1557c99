//! # Shop Endpoints
//!
//! Shop connections and their platform webhooks.

use serde_json::Value;
use shared::{ConnectionCheck, PageResult, ShopDto, ShopQuery, WebhookDto, WebhookRegistration};

use super::client::{Ack, ApiClient};
use crate::core::error::Result;

pub async fn list(client: &ApiClient, query: &ShopQuery) -> Result<PageResult<ShopDto>> {
    client.get_with_query("/shops", query).await
}

pub async fn detail(client: &ApiClient, id: i64) -> Result<ShopDto> {
    client.get(&format!("/shops/{}", id)).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    client
        .delete(&format!("/shops/{}", id))
        .await
        .map(|_: Ack| ())
}

/// Shop details fetched live from the commerce platform.
///
/// Returned as raw JSON; the shape is the platform's, not ours.
pub async fn live_info(client: &ApiClient, id: i64) -> Result<Value> {
    client.get(&format!("/shops/{}/info", id)).await
}

/// Re-read the platform details into the stored shop.
pub async fn refresh_info(client: &ApiClient, id: i64) -> Result<ShopDto> {
    client.post_empty(&format!("/shops/{}/refresh-info", id)).await
}

/// Health check of the stored platform credentials.
#[tracing::instrument(skip(client))]
pub async fn validate_connection(client: &ApiClient, id: i64) -> Result<ConnectionCheck> {
    let check: Option<ConnectionCheck> = client.post_empty(&format!("/shops/{}/validate", id)).await?;
    let check = check.unwrap_or_default();
    if !check.is_valid() {
        tracing::warn!(shop_id = id, message = ?check.message, "Shop connection invalid");
    }
    Ok(check)
}

pub async fn webhooks(client: &ApiClient, id: i64) -> Result<Vec<WebhookDto>> {
    client.get(&format!("/shops/{}/webhooks", id)).await
}

/// Register the console's webhook topics on the shop.
///
/// Partial failure is not an error; check `failed` on the result.
#[tracing::instrument(skip(client))]
pub async fn register_webhooks(client: &ApiClient, id: i64) -> Result<WebhookRegistration> {
    let registration: WebhookRegistration = client
        .post_empty(&format!("/shops/{}/webhooks/register", id))
        .await?;
    tracing::info!(
        shop = %registration.shop,
        registered = registration.total_success,
        failed = registration.total_failed,
        "Webhooks registered"
    );
    Ok(registration)
}

/// Remove every webhook of the shop.
pub async fn delete_webhooks(client: &ApiClient, id: i64) -> Result<()> {
    client
        .delete(&format!("/shops/{}/webhooks", id))
        .await
        .map(|_: Ack| ())
}
