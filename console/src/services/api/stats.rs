//! # Statistics Endpoints

use shared::DashboardStats;

use super::client::ApiClient;
use crate::core::error::Result;

/// Figures for the dashboard landing page.
pub async fn dashboard(client: &ApiClient) -> Result<DashboardStats> {
    client.get("/stats/dashboard").await
}
