//! # Product Publishing Endpoints

use shared::PublishRequest;

use super::client::{Ack, ApiClient};
use crate::core::error::{ConsoleError, Result};

/// Publish products to the given shops.
#[tracing::instrument(skip(client, request), fields(products = request.product_ids.len(), shops = request.shop_ids.len()))]
pub async fn publish(client: &ApiClient, request: &PublishRequest) -> Result<()> {
    check(request)?;
    client
        .post("/product-publish/publish", request)
        .await
        .map(|_: Ack| ())
}

/// Take products off the given shops.
#[tracing::instrument(skip(client, request), fields(products = request.product_ids.len(), shops = request.shop_ids.len()))]
pub async fn unpublish(client: &ApiClient, request: &PublishRequest) -> Result<()> {
    check(request)?;
    client
        .post("/product-publish/unpublish", request)
        .await
        .map(|_: Ack| ())
}

fn check(request: &PublishRequest) -> Result<()> {
    if request.product_ids.is_empty() || request.shop_ids.is_empty() {
        return Err(ConsoleError::Validation(
            "Select at least one product and one shop".to_string(),
        ));
    }
    Ok(())
}
