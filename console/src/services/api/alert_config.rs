//! # Alert Configuration Endpoints
//!
//! Notification recipients and the mailboxes monitored for alert mails.

use shared::{EmailMonitorDto, RecipientDto};

use super::client::{Ack, ApiClient};
use crate::core::error::Result;

const RECIPIENTS: &str = "/alert-config/recipients";
const EMAIL_MONITORS: &str = "/alert-config/email-monitors";

// Recipients

pub async fn recipients(client: &ApiClient) -> Result<Vec<RecipientDto>> {
    client.get(RECIPIENTS).await
}

pub async fn create_recipient(client: &ApiClient, recipient: &RecipientDto) -> Result<RecipientDto> {
    client.post(RECIPIENTS, recipient).await
}

pub async fn update_recipient(client: &ApiClient, id: i64, recipient: &RecipientDto) -> Result<RecipientDto> {
    client.put(&format!("{}/{}", RECIPIENTS, id), recipient).await
}

pub async fn delete_recipient(client: &ApiClient, id: i64) -> Result<()> {
    client
        .delete(&format!("{}/{}", RECIPIENTS, id))
        .await
        .map(|_: Ack| ())
}

/// Flip the recipient between enabled and disabled.
pub async fn toggle_recipient(client: &ApiClient, id: i64) -> Result<()> {
    client
        .put_empty(&format!("{}/{}/toggle", RECIPIENTS, id))
        .await
        .map(|_: Ack| ())
}

/// Send a test notification to the recipient.
pub async fn test_recipient(client: &ApiClient, id: i64) -> Result<()> {
    client
        .post_empty(&format!("{}/{}/test", RECIPIENTS, id))
        .await
        .map(|_: Ack| ())
}

// Email monitors

pub async fn email_monitors(client: &ApiClient) -> Result<Vec<EmailMonitorDto>> {
    client.get(EMAIL_MONITORS).await
}

pub async fn create_email_monitor(client: &ApiClient, monitor: &EmailMonitorDto) -> Result<EmailMonitorDto> {
    client.post(EMAIL_MONITORS, monitor).await
}

pub async fn update_email_monitor(
    client: &ApiClient,
    id: i64,
    monitor: &EmailMonitorDto,
) -> Result<EmailMonitorDto> {
    client.put(&format!("{}/{}", EMAIL_MONITORS, id), monitor).await
}

pub async fn delete_email_monitor(client: &ApiClient, id: i64) -> Result<()> {
    client
        .delete(&format!("{}/{}", EMAIL_MONITORS, id))
        .await
        .map(|_: Ack| ())
}

pub async fn toggle_email_monitor(client: &ApiClient, id: i64) -> Result<()> {
    client
        .put_empty(&format!("{}/{}/toggle", EMAIL_MONITORS, id))
        .await
        .map(|_: Ack| ())
}

/// Try an IMAP login with the stored settings.
pub async fn test_email_connection(client: &ApiClient, id: i64) -> Result<()> {
    client
        .post_empty(&format!("{}/{}/test-connection", EMAIL_MONITORS, id))
        .await
        .map(|_: Ack| ())
}
