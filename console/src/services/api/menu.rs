//! # Menu Endpoints
//!
//! Menus come back either flat or as trees nested through `children`.

use shared::{MenuDto, MenuRequest};

use super::client::{Ack, ApiClient};
use crate::core::error::Result;

/// Menu tree visible to the current user.
pub async fn user_tree(client: &ApiClient) -> Result<Vec<MenuDto>> {
    client.get("/menus/user").await
}

/// Full menu tree (admin).
pub async fn tree(client: &ApiClient) -> Result<Vec<MenuDto>> {
    client.get("/menus/tree").await
}

pub async fn all(client: &ApiClient) -> Result<Vec<MenuDto>> {
    client.get("/menus").await
}

pub async fn by_id(client: &ApiClient, id: i64) -> Result<MenuDto> {
    client.get(&format!("/menus/{}", id)).await
}

pub async fn create(client: &ApiClient, request: &MenuRequest) -> Result<MenuDto> {
    client.post("/menus", request).await
}

pub async fn update(client: &ApiClient, id: i64, request: &MenuRequest) -> Result<MenuDto> {
    client.put(&format!("/menus/{}", id), request).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    client
        .delete(&format!("/menus/{}", id))
        .await
        .map(|_: Ack| ())
}
