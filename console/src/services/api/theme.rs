//! # Theme Endpoints
//!
//! Theme version archive and the migration wizard:
//!
//! ```text
//! archive_version ─► analyze_diff ─► migration_rules
//!                                        │
//! start_migration ─► (review rules) ─► execute_migration ─► download_migrated
//! ```

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use shared::{MigrationResult, MigrationRuleQuery, MigrationSession, ThemeVersionDto};

use super::client::{Ack, ApiClient, FileUpload};
use crate::core::error::{ConsoleError, Result};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionParams<'a> {
    theme_name: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DiffParams<'a> {
    theme_name: &'a str,
    from_version: &'a str,
    to_version: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionParam {
    session_id: i64,
}

/// Upload a theme archive as a new stored version.
#[tracing::instrument(skip(client, archive), fields(bytes = archive.bytes.len()))]
pub async fn archive_version(
    client: &ApiClient,
    theme_name: &str,
    version: &str,
    archive: FileUpload,
) -> Result<ThemeVersionDto> {
    let theme_name = theme_segment(theme_name)?;
    lib_utils::validate_required(version, "Version").map_err(ConsoleError::Validation)?;

    client
        .upload(
            "/theme/version/archive",
            archive,
            &[("themeName", theme_name.to_string()), ("version", version.to_string())],
        )
        .await
}

pub async fn version_history(client: &ApiClient, theme_name: &str) -> Result<Vec<ThemeVersionDto>> {
    let theme_name = theme_segment(theme_name)?;
    client.get(&format!("/theme/version/history/{}", theme_name)).await
}

/// Version marked current, if any.
pub async fn current_version(client: &ApiClient, theme_name: &str) -> Result<Option<ThemeVersionDto>> {
    let theme_name = theme_segment(theme_name)?;
    client.get(&format!("/theme/version/current/{}", theme_name)).await
}

pub async fn set_current_version(client: &ApiClient, theme_name: &str, version: &str) -> Result<()> {
    client
        .post_with_query("/theme/version/set-current", &VersionParams { theme_name, version })
        .await
        .map(|_: Ack| ())
}

pub async fn delete_version(client: &ApiClient, version_id: i64) -> Result<()> {
    client
        .delete(&format!("/theme/version/{}", version_id))
        .await
        .map(|_: Ack| ())
}

/// Run the deep diff between two stored versions. The report is returned as-is.
#[tracing::instrument(skip(client))]
pub async fn analyze_diff(client: &ApiClient, theme_name: &str, from_version: &str, to_version: &str) -> Result<Value> {
    client
        .post_with_query(
            "/theme/version/analyze-diff",
            &DiffParams {
                theme_name,
                from_version,
                to_version,
            },
        )
        .await
}

pub async fn migration_rules(client: &ApiClient, query: &MigrationRuleQuery) -> Result<Value> {
    client.get_with_query("/theme/version/migration-rules", query).await
}

/// Upload the customized theme and let the backend suggest migration rules.
#[tracing::instrument(skip(client, archive), fields(bytes = archive.bytes.len()))]
pub async fn start_migration(
    client: &ApiClient,
    theme_name: &str,
    from_version: &str,
    to_version: &str,
    archive: FileUpload,
) -> Result<MigrationSession> {
    let theme_name = theme_segment(theme_name)?;
    let session: MigrationSession = client
        .upload(
            "/theme/migration/start",
            archive,
            &[
                ("themeName", theme_name.to_string()),
                ("fromVersion", from_version.to_string()),
                ("toVersion", to_version.to_string()),
            ],
        )
        .await?;
    tracing::info!(session_id = session.id, status = ?session.status, "Theme migration started");
    Ok(session)
}

/// Apply the rules the operator confirmed.
#[tracing::instrument(skip(client, confirmed_rules))]
pub async fn execute_migration(client: &ApiClient, session_id: i64, confirmed_rules: &Value) -> Result<MigrationResult> {
    let builder = client
        .request(Method::POST, "/theme/migration/execute")
        .query(&SessionParam { session_id })
        .json(confirmed_rules);
    let result: MigrationResult = client.send(builder).await?;

    if result.success {
        tracing::info!(history_id = ?result.history_id, templates = result.templates_updated, "Theme migration executed");
    } else {
        tracing::warn!(details = ?result.error_details, "Theme migration reported failure");
    }
    Ok(result)
}

pub async fn session(client: &ApiClient, session_id: i64) -> Result<MigrationSession> {
    client.get(&format!("/theme/migration/session/{}", session_id)).await
}

/// Migrated theme archive (zip bytes).
pub async fn download_migrated(client: &ApiClient, history_id: i64) -> Result<Vec<u8>> {
    client
        .download(client.request(Method::GET, &format!("/theme/migration/download/{}", history_id)))
        .await
}

/// Theme names are used as path segments.
fn theme_segment(theme_name: &str) -> Result<&str> {
    let name = theme_name.trim();
    lib_utils::validate_required(name, "Theme name").map_err(ConsoleError::Validation)?;
    if name.contains(['/', '?', '#']) {
        return Err(ConsoleError::Validation(format!("Invalid theme name '{}'", name)));
    }
    Ok(name)
}
