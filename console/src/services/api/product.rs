//! # Product Endpoints
//!
//! Product catalogue imported from platform CSV exports, variant pricing and
//! procurement data.

use reqwest::Method;
use shared::{
    ImportSummary, PageQuery, PageResult, PriceUpdate, ProcurementSummary, ProcurementUpdate, ProductDto,
    ProductIdsRequest, ProductUpdateRequest, VariantDto,
};

use super::client::{Ack, ApiClient, FileUpload};
use crate::core::error::{ConsoleError, Result};

/// Import a platform product CSV.
#[tracing::instrument(skip(client, file), fields(file_name = %file.file_name, bytes = file.bytes.len()))]
pub async fn import_csv(client: &ApiClient, file: FileUpload) -> Result<ImportSummary> {
    if file.bytes.is_empty() {
        return Err(ConsoleError::Validation("CSV file is empty".to_string()));
    }
    let summary: ImportSummary = client.upload("/product/import", file, &[]).await?;
    tracing::info!(imported = summary.imported, skipped = summary.skipped, "Product CSV imported");
    Ok(summary)
}

pub async fn list(client: &ApiClient, query: &PageQuery) -> Result<PageResult<ProductDto>> {
    client.get_with_query("/product/list", query).await
}

/// Export the given products as a platform-ready CSV file.
#[tracing::instrument(skip(client, product_ids), fields(count = product_ids.len()))]
pub async fn export_csv(client: &ApiClient, product_ids: Vec<i64>) -> Result<Vec<u8>> {
    if product_ids.is_empty() {
        return Err(ConsoleError::Validation("Select at least one product to export".to_string()));
    }
    let builder = client
        .request(Method::POST, "/listing/export/csv")
        .json(&ProductIdsRequest { product_ids });
    client.download(builder).await
}

pub async fn detail(client: &ApiClient, id: i64) -> Result<ProductDto> {
    client.get(&format!("/product/{}", id)).await
}

pub async fn update(client: &ApiClient, id: i64, request: &ProductUpdateRequest) -> Result<ProductDto> {
    client.put(&format!("/product/{}", id), request).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    client
        .delete(&format!("/product/{}", id))
        .await
        .map(|_: Ack| ())
}

pub async fn variants(client: &ApiClient, product_id: i64) -> Result<Vec<VariantDto>> {
    client.get(&format!("/product/{}/variants", product_id)).await
}

/// Set the same price on every variant of a product.
pub async fn update_product_price(client: &ApiClient, product_id: i64, price: &PriceUpdate) -> Result<()> {
    check_price(price)?;
    client
        .put(&format!("/product/{}/price", product_id), price)
        .await
        .map(|_: Ack| ())
}

pub async fn update_variant_price(client: &ApiClient, variant_id: i64, price: &PriceUpdate) -> Result<()> {
    check_price(price)?;
    client
        .put(&format!("/product/variants/{}/price", variant_id), price)
        .await
        .map(|_: Ack| ())
}

/// Products with a per-product procurement summary.
pub async fn procurement_list(client: &ApiClient, query: &PageQuery) -> Result<PageResult<ProcurementSummary>> {
    client.get_with_query("/product/procurement-list", query).await
}

pub async fn update_variant_procurement(
    client: &ApiClient,
    variant_id: i64,
    procurement: &ProcurementUpdate,
) -> Result<()> {
    if procurement.procurement_price.is_some_and(|p| p < 0.0) {
        return Err(ConsoleError::Validation("Procurement price cannot be negative".to_string()));
    }
    client
        .put(&format!("/product/variants/{}/procurement", variant_id), procurement)
        .await
        .map(|_: Ack| ())
}

fn check_price(price: &PriceUpdate) -> Result<()> {
    if !price.price.is_finite() || price.price < 0.0 {
        return Err(ConsoleError::Validation("Price must be a non-negative number".to_string()));
    }
    if price.compare_at_price.is_some_and(|c| c < price.price) {
        return Err(ConsoleError::Validation(
            "Compare-at price must not be lower than the price".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_price() {
        assert!(check_price(&PriceUpdate {
            price: 19.9,
            compare_at_price: Some(29.9)
        })
        .is_ok());
        assert!(check_price(&PriceUpdate {
            price: -1.0,
            compare_at_price: None
        })
        .is_err());
        assert!(check_price(&PriceUpdate {
            price: 30.0,
            compare_at_price: Some(20.0)
        })
        .is_err());
    }
}
