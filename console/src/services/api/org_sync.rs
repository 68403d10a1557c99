//! # Organization Sync Endpoints
//!
//! Mirror departments, users and roles from the company's IM directory
//! (DingTalk) into the console's user and role tables.

use serde::Serialize;
use shared::SyncLogDto;

use super::client::ApiClient;
use crate::core::error::Result;

/// Default number of log entries shown on the sync page.
pub const DEFAULT_LOG_LIMIT: u32 = 20;

#[derive(Serialize)]
struct LimitParam {
    limit: u32,
}

/// Partial sync run. A full run is started with [`full_sync`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncScope {
    Departments,
    Users,
    /// Re-apply the role mapping rules to synced users.
    Roles,
}

impl SyncScope {
    fn path(&self) -> &'static str {
        match self {
            SyncScope::Departments => "/dingtalk/sync/departments",
            SyncScope::Users => "/dingtalk/sync/users",
            SyncScope::Roles => "/dingtalk/sync/roles",
        }
    }
}

/// Sync departments, users and roles in one run and return its log entry.
#[tracing::instrument(skip(client))]
pub async fn full_sync(client: &ApiClient) -> Result<SyncLogDto> {
    let log: SyncLogDto = client.post_empty("/dingtalk/sync/full").await?;
    tracing::info!(
        status = %log.status,
        success = log.success_count,
        failed = log.failed_count,
        "Organization sync finished"
    );
    Ok(log)
}

/// Run one part of the sync; returns how many records it touched.
#[tracing::instrument(skip(client))]
pub async fn sync(client: &ApiClient, scope: SyncScope) -> Result<i32> {
    let count: Option<i32> = client.post_empty(scope.path()).await?;
    let count = count.unwrap_or_default();
    tracing::info!(count, "Organization sync finished");
    Ok(count)
}

/// Most recent runs, newest first.
pub async fn logs(client: &ApiClient, limit: u32) -> Result<Vec<SyncLogDto>> {
    client
        .get_with_query("/dingtalk/sync/logs", &LimitParam { limit: limit.max(1) })
        .await
}

pub async fn log_detail(client: &ApiClient, id: i64) -> Result<SyncLogDto> {
    client.get(&format!("/dingtalk/sync/logs/{}", id)).await
}
