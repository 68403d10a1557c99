//! # Permission Endpoints

use shared::{PermissionDto, PermissionRequest};

use super::client::{Ack, ApiClient};
use crate::core::error::Result;

pub async fn all(client: &ApiClient) -> Result<Vec<PermissionDto>> {
    client.get("/permissions").await
}

pub async fn detail(client: &ApiClient, id: i64) -> Result<PermissionDto> {
    client.get(&format!("/permissions/{}", id)).await
}

pub async fn create(client: &ApiClient, request: &PermissionRequest) -> Result<PermissionDto> {
    client.post("/permissions", request).await
}

pub async fn update(client: &ApiClient, id: i64, request: &PermissionRequest) -> Result<PermissionDto> {
    client.put(&format!("/permissions/{}", id), request).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    client
        .delete(&format!("/permissions/{}", id))
        .await
        .map(|_: Ack| ())
}
