//! # User Endpoints

use serde::Serialize;
use shared::{ChangePasswordRequest, PageQuery, PageResult, UserDto, UserRequest, UserRolesRequest};

use super::client::{Ack, ApiClient};
use crate::core::error::Result;

/// Paged user list.
pub async fn list(client: &ApiClient, query: &PageQuery) -> Result<PageResult<UserDto>> {
    client.get_with_query("/users", query).await
}

pub async fn all(client: &ApiClient) -> Result<Vec<UserDto>> {
    client.get("/users/all").await
}

pub async fn detail(client: &ApiClient, id: i64) -> Result<UserDto> {
    client.get(&format!("/users/{}", id)).await
}

#[tracing::instrument(skip(client, request), fields(username = ?request.username))]
pub async fn create(client: &ApiClient, request: &UserRequest) -> Result<UserDto> {
    client.post("/users", request).await
}

pub async fn update(client: &ApiClient, id: i64, request: &UserRequest) -> Result<UserDto> {
    client.put(&format!("/users/{}", id), request).await
}

pub async fn change_password(client: &ApiClient, id: i64, request: &ChangePasswordRequest) -> Result<()> {
    client
        .post(&format!("/users/{}/password", id), request)
        .await
        .map(|_: Ack| ())
}

/// Enable (`1`) or disable (`0`) an account.
pub async fn update_status(client: &ApiClient, id: i64, status: i32) -> Result<()> {
    #[derive(Serialize)]
    struct StatusQuery {
        status: i32,
    }

    client
        .put_with_query(&format!("/users/{}/status", id), &StatusQuery { status })
        .await
        .map(|_: Ack| ())
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    client
        .delete(&format!("/users/{}", id))
        .await
        .map(|_: Ack| ())
}

/// Replace the roles of a user.
pub async fn update_roles(client: &ApiClient, id: i64, role_ids: Vec<i64>) -> Result<()> {
    client
        .put(&format!("/users/{}/roles", id), &UserRolesRequest { role_ids })
        .await
        .map(|_: Ack| ())
}
