//! Dashboard statistics and organization-sync logs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_shops: i64,
    #[serde(default)]
    pub active_shops: i64,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub today_orders: i64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub today_revenue: f64,
    #[serde(default)]
    pub pending_alerts: i64,
    #[serde(default)]
    pub shops: Vec<ShopOverview>,
    #[serde(default)]
    pub recent_alerts: Vec<AlertItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopOverview {
    pub id: i64,
    pub shop_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub order_count: i64,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync_time: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertItem {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

/// One run of the organization sync with the external IM directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncLogDto {
    pub id: i64,
    /// FULL / DEPARTMENT / USER / ROLE
    pub sync_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_mode: Option<String>,
    pub status: String,
    #[serde(default)]
    pub total_count: i32,
    #[serde(default)]
    pub success_count: i32,
    #[serde(default)]
    pub failed_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_log_parses_backend_timestamps() {
        let body = r#"{"id":9,"syncType":"FULL","status":"SUCCESS","totalCount":12,
            "successCount":12,"failedCount":0,"startedAt":"2024-05-01T08:30:00"}"#;
        let log: SyncLogDto = serde_json::from_str(body).unwrap();

        assert_eq!(log.total_count, 12);
        assert_eq!(
            log.started_at.map(|t| t.to_string()),
            Some("2024-05-01 08:30:00".to_string())
        );
    }
}
