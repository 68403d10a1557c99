//! # Tracking Endpoints
//!
//! Parcel tracking numbers: listing, manual entry, carrier sync and bulk
//! import. Tracking numbers are checked locally before they are sent.

use serde::Serialize;
use shared::{
    BatchImportItem, BatchImportResult, CarrierDto, PageResult, TrackingDto, TrackingQuery, TrackingRequest,
};

use super::client::{Ack, ApiClient};
use crate::core::error::{ConsoleError, Result};

#[derive(Serialize)]
struct RemarksRequest<'a> {
    remarks: &'a str,
}

#[derive(Serialize)]
struct IdsRequest<'a> {
    ids: &'a [i64],
}

#[derive(Serialize)]
struct ImportRequest<'a> {
    items: &'a [BatchImportItem],
}

pub async fn list(client: &ApiClient, query: &TrackingQuery) -> Result<PageResult<TrackingDto>> {
    client.get_with_query("/tracking", query).await
}

/// Carriers that appear on existing tracking numbers.
pub async fn used_carriers(client: &ApiClient) -> Result<Vec<CarrierDto>> {
    client.get("/tracking/carriers").await
}

pub async fn detail(client: &ApiClient, id: i64) -> Result<TrackingDto> {
    client.get(&format!("/tracking/{}", id)).await
}

#[tracing::instrument(skip(client, request), fields(tracking_number = %request.tracking_number))]
pub async fn create(client: &ApiClient, request: &TrackingRequest) -> Result<TrackingDto> {
    lib_utils::validate_tracking_number(&request.tracking_number).map_err(ConsoleError::Validation)?;
    client.post("/tracking", request).await
}

/// Pull the latest carrier events for one tracking number.
pub async fn sync(client: &ApiClient, id: i64) -> Result<TrackingDto> {
    client.post_empty(&format!("/tracking/{}/sync", id)).await
}

pub async fn update_remarks(client: &ApiClient, id: i64, remarks: &str) -> Result<()> {
    lib_utils::validate_length(remarks, 0, 500, "Remarks").map_err(ConsoleError::Validation)?;
    client
        .put(&format!("/tracking/{}/remarks", id), &RemarksRequest { remarks })
        .await
        .map(|_: Ack| ())
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    client
        .delete(&format!("/tracking/{}", id))
        .await
        .map(|_: Ack| ())
}

pub async fn batch_delete(client: &ApiClient, ids: &[i64]) -> Result<()> {
    if ids.is_empty() {
        return Ok(());
    }
    client
        .post("/tracking/batch-delete", &IdsRequest { ids })
        .await
        .map(|_: Ack| ())
}

/// Import many tracking numbers at once.
///
/// The whole batch is rejected locally if any number is malformed.
#[tracing::instrument(skip(client, items), fields(count = items.len()))]
pub async fn batch_import(client: &ApiClient, items: &[BatchImportItem]) -> Result<BatchImportResult> {
    for (row, item) in items.iter().enumerate() {
        lib_utils::validate_tracking_number(&item.tracking_number)
            .map_err(|e| ConsoleError::Validation(format!("row {}: {}", row + 1, e)))?;
    }

    let result: BatchImportResult = client.post("/tracking/batch-import", &ImportRequest { items }).await?;
    tracing::info!(
        total = result.total,
        success = result.success,
        failed = result.failed,
        "Tracking import finished"
    );
    Ok(result)
}
