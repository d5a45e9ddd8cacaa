//! API utilities for frontend-backend communication
//!
//! Provides the base URL, the error type shared by every API call and
//! small request helpers on top of `gloo_net`.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Shown when an error carries no usable text at all
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong.";

/// Port used when `API_BASE_URL` is not set at build time
const DEFAULT_API_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// Taken from the `API_BASE_URL` build-time environment value. Without it
/// the URL is derived from the current window location on port 8000.
///
/// # Returns
/// - API base URL without trailing slash, e.g. "http://localhost:8000"
/// - Empty string if neither is available
pub fn api_base() -> String {
    if let Some(configured) = option_env!("API_BASE_URL") {
        return normalize_base(configured);
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/receive_order/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Http { status: u16, detail: Option<String> },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Builds an error from a non-2xx response, keeping the backend `detail`.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let detail = response
            .text()
            .await
            .ok()
            .and_then(|body| extract_detail(&body));
        ApiError::Http { status, detail }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http {
                detail: Some(detail),
                ..
            } => Some(detail.as_str()),
            _ => None,
        }
    }

    /// Text for the user: backend detail, then the error itself, then a
    /// fixed fallback.
    pub fn user_message(&self) -> String {
        if let Some(detail) = self.detail().filter(|d| !d.trim().is_empty()) {
            return detail.to_string();
        }
        match self {
            ApiError::Network(msg) | ApiError::Parse(msg) if msg.trim().is_empty() => {
                FALLBACK_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Pulls `detail` out of an error body.
///
/// Accepts `{"detail": "text"}` as well as validation payloads of the form
/// `{"detail": [{"msg": "..."}, ...]}`, whose messages are joined with "; ".
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        Value::Null => None,
        Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::from_response(response).await)
    }
}

async fn read_text(response: Response) -> Result<String, ApiError> {
    response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Parses a JSON body; an empty body reads as `null`.
pub fn parse_json_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// GET returning a JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = read_text(ensure_ok(response).await?).await?;
    parse_json_body(&body)
}

/// GET returning the raw body together with its `Content-Type`
pub async fn get_text(url: &str) -> Result<(String, Option<String>), ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = ensure_ok(response).await?;
    let content_type = response.headers().get("content-type");
    let body = read_text(response).await?;
    Ok((body, content_type))
}

/// POST a JSON body, returning whatever JSON the backend echoes back
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Value, ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = read_text(ensure_ok(response).await?).await?;
    parse_json_body(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(" http://api.local:8000/ "), "http://api.local:8000");
        assert_eq!(normalize_base("https://x.io//"), "https://x.io");
    }

    #[test]
    fn test_extract_detail_string() {
        assert_eq!(
            extract_detail(r#"{"detail":"Vendor not found"}"#).as_deref(),
            Some("Vendor not found")
        );
    }

    #[test]
    fn test_extract_detail_validation_list() {
        let body = r#"{"detail":[{"loc":["body","kgs"],"msg":"field required"},{"msg":"bad date"}]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("field required; bad date")
        );
    }

    #[test]
    fn test_extract_detail_absent() {
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"error":"x"}"#), None);
        assert_eq!(extract_detail(r#"{"detail":"  "}"#), None);
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::Http {
            status: 404,
            detail: Some("No yarn with that status".into()),
        };
        assert_eq!(err.user_message(), "No yarn with that status");
    }

    #[test]
    fn test_user_message_falls_back_to_error_text() {
        let err = ApiError::Http {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message(), "HTTP error: 500");
        assert_eq!(
            ApiError::Network("connection refused".into()).user_message(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_user_message_fixed_fallback() {
        assert_eq!(
            ApiError::Network(String::new()).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_parse_empty_body_as_null() {
        let value: Value = parse_json_body("  ").unwrap();
        assert_eq!(value, Value::Null);
        assert!(parse_json_body::<Value>("{oops").is_err());
    }
}
