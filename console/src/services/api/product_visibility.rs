//! # Product Visibility Endpoints
//!
//! Which shops may see (and publish) which products.

use serde::Serialize;
use shared::{PageQuery, PageResult, ProductDto, VisibilityAuthorization, VisibilityRequest};

use super::client::{Ack, ApiClient};
use crate::core::error::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShopParam {
    shop_id: i64,
}

/// Products the selected shop is authorized for.
pub async fn authorized_products(client: &ApiClient, query: &PageQuery) -> Result<PageResult<ProductDto>> {
    client.get_with_query("/product-visibility/products", query).await
}

pub async fn count_authorized(client: &ApiClient, query: &PageQuery) -> Result<i64> {
    client.get_with_query("/product-visibility/products/count", query).await
}

pub async fn check(client: &ApiClient, product_id: i64, shop_id: i64) -> Result<bool> {
    client
        .get_with_query(
            &format!("/product-visibility/products/{}/check", product_id),
            &ShopParam { shop_id },
        )
        .await
}

#[tracing::instrument(skip(client, request), fields(products = request.product_ids.len(), shops = request.shop_ids.len()))]
pub async fn grant(client: &ApiClient, request: &VisibilityRequest) -> Result<()> {
    client
        .post("/product-visibility/grant", request)
        .await
        .map(|_: Ack| ())
}

#[tracing::instrument(skip(client, request), fields(products = request.product_ids.len(), shops = request.shop_ids.len()))]
pub async fn revoke(client: &ApiClient, request: &VisibilityRequest) -> Result<()> {
    client
        .post("/product-visibility/revoke", request)
        .await
        .map(|_: Ack| ())
}

pub async fn authorizations(client: &ApiClient, product_id: i64) -> Result<Vec<VisibilityAuthorization>> {
    client
        .get(&format!("/product-visibility/products/{}/authorizations", product_id))
        .await
}
