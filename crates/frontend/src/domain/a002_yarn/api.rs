use crate::shared::api_utils::{api_url, get_json, post_json, ApiError};
use contracts::domain::a002_yarn::{YarnReceipt, YarnRecord, YarnRequest, YarnStatusQuery};
use serde_json::Value;

const REQUEST_PATH: &str = "/request_yarn/";
const VIEW_PATH: &str = "/view_yarn/";
const RECEIVE_PATH: &str = "/receive_yarn/";
const VIEW_ALL_PATH: &str = "/view_all_yarn/";

/// Order yarn from a vendor
pub async fn request_yarn(request: &YarnRequest) -> Result<Value, ApiError> {
    post_json(&api_url(REQUEST_PATH), request).await
}

/// Yarn requests, optionally filtered by status
pub async fn view_yarn(status: Option<String>) -> Result<Value, ApiError> {
    let query = serde_qs::to_string(&YarnStatusQuery { status })
        .map_err(|e| ApiError::Parse(format!("Failed to build query: {}", e)))?;
    let url = if query.is_empty() {
        api_url(VIEW_PATH)
    } else {
        format!("{}?{}", api_url(VIEW_PATH), query)
    };
    get_json(&url).await
}

/// Record yarn received from a vendor
pub async fn receive_yarn(receipt: &YarnReceipt) -> Result<Value, ApiError> {
    post_json(&api_url(RECEIVE_PATH), receipt).await
}

/// Every yarn receipt on record; an empty body reads as no records
pub async fn view_all_yarn() -> Result<Vec<YarnRecord>, ApiError> {
    let records: Option<Vec<YarnRecord>> = get_json(&api_url(VIEW_ALL_PATH)).await?;
    Ok(records.unwrap_or_default())
}
