//! # Authentication Endpoints
//!
//! Login, token validation and the current user.

use serde_json::Value;
use shared::{LoginRequest, LoginResponse, UserDto};

use super::client::ApiClient;
use crate::core::error::{ConsoleError, Result};

/// Exchange credentials for a token.
#[tracing::instrument(skip(client, credentials), fields(username = %credentials.username))]
pub async fn login(client: &ApiClient, credentials: &LoginRequest) -> Result<LoginResponse> {
    lib_utils::validate_required(&credentials.username, "Username")
        .and_then(|_| lib_utils::validate_required(&credentials.password, "Password"))
        .map_err(ConsoleError::Validation)?;

    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let response: LoginResponse = client.post("/auth/login", credentials).await?;

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    Ok(response)
}

/// Whether the backend still accepts the current token.
///
/// A rejected token surfaces as `Unauthenticated` through the client.
pub async fn validate_token(client: &ApiClient) -> Result<bool> {
    let data: Value = client.get("/auth/validate").await?;
    Ok(match data {
        Value::Bool(valid) => valid,
        _ => true,
    })
}

pub async fn current_user(client: &ApiClient) -> Result<UserDto> {
    client.get("/auth/current").await
}
