use crate::shared::api_utils::{api_url, get_text, post_json, ApiError};
use contracts::domain::a001_purchase_order::PurchaseOrder;
use serde_json::Value;

const RECEIVE_ORDER_PATH: &str = "/receive_order/";
const DOWNLOAD_PATH: &str = "/download_purchase_order";

/// Submit a new purchase order
pub async fn receive_order(order: &PurchaseOrder) -> Result<Value, ApiError> {
    post_json(&api_url(RECEIVE_ORDER_PATH), order).await
}

/// Fetch a stored purchase order; the body is JSON or CSV
///
/// Returns the raw body and its `Content-Type`.
pub async fn download_purchase_order(po_number: &str) -> Result<(String, Option<String>), ApiError> {
    let url = api_url(&format!(
        "{}/{}",
        DOWNLOAD_PATH,
        urlencoding::encode(po_number.trim())
    ));
    get_text(&url).await
}
