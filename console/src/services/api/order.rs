//! # Order Endpoints

use shared::{OrderDto, OrderQuery, PageResult};

use super::client::ApiClient;
use crate::core::error::Result;

/// Orders of the selected shop (all accessible shops when none is selected).
pub async fn list(client: &ApiClient, query: &OrderQuery) -> Result<PageResult<OrderDto>> {
    client.get_with_query("/orders", query).await
}

pub async fn detail(client: &ApiClient, id: i64) -> Result<OrderDto> {
    client.get(&format!("/orders/{}", id)).await
}
