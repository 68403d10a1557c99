//! # Role Endpoints

use shared::{PermissionDto, RoleDto, RolePermissionsRequest, RoleRequest};

use super::client::{Ack, ApiClient};
use crate::core::error::Result;

pub async fn all(client: &ApiClient) -> Result<Vec<RoleDto>> {
    client.get("/roles").await
}

pub async fn by_id(client: &ApiClient, id: i64) -> Result<RoleDto> {
    client.get(&format!("/roles/{}", id)).await
}

pub async fn create(client: &ApiClient, request: &RoleRequest) -> Result<RoleDto> {
    client.post("/roles", request).await
}

pub async fn update(client: &ApiClient, id: i64, request: &RoleRequest) -> Result<RoleDto> {
    client.put(&format!("/roles/{}", id), request).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    client
        .delete(&format!("/roles/{}", id))
        .await
        .map(|_: Ack| ())
}

pub async fn permissions(client: &ApiClient, role_id: i64) -> Result<Vec<PermissionDto>> {
    client.get(&format!("/roles/{}/permissions", role_id)).await
}

/// Replace the permission set of a role.
#[tracing::instrument(skip(client, permission_ids), fields(count = permission_ids.len()))]
pub async fn update_permissions(client: &ApiClient, role_id: i64, permission_ids: Vec<i64>) -> Result<()> {
    client
        .put(
            &format!("/roles/{}/permissions", role_id),
            &RolePermissionsRequest { permission_ids },
        )
        .await
        .map(|_: Ack| ())
}

/// Roles with their `permissions` populated.
pub async fn all_with_permissions(client: &ApiClient) -> Result<Vec<RoleDto>> {
    client.get("/roles/with-permissions").await
}
