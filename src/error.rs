//! API Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// A browser API threw (fetch rejected, missing window, ...)
    #[error("browser error: {0}")]
    Js(String),

    #[error("HTTP {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("invalid response: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    pub fn js(value: JsValue) -> Self {
        ApiError::Js(format!("{value:?}"))
    }

    /// Server-supplied reason, when the backend sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status { status: 404, detail: Some("Request with control number X not found.".into()) };
        assert_eq!(err.to_string(), "HTTP 404: Request with control number X not found.");
        assert_eq!(err.detail(), Some("Request with control number X not found."));

        let err = ApiError::Status { status: 500, detail: None };
        assert_eq!(err.to_string(), "HTTP 500");
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_decode_has_no_detail() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.detail(), None);
    }
}
