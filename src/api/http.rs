//! Fetch Helpers
//!
//! Thin wrappers over `window.fetch` returning typed JSON or blobs.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Encode a query value or a single path segment
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

async fn send(config: &Config, method: Method, path: &str, body: Option<String>) -> ApiResult<Response> {
    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let url = config.url(path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(ApiError::js)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(ApiError::js)?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(ApiError::js)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Js("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::js)?;
    let resp: Response = resp_value.dyn_into().map_err(ApiError::js)?;

    log::debug!("{} {} -> {}", method.as_str(), url, resp.status());
    if !resp.ok() {
        return Err(status_error(&resp).await);
    }
    Ok(resp)
}

async fn read_json<T: DeserializeOwned>(resp: &Response) -> ApiResult<T> {
    let value = JsFuture::from(resp.json().map_err(ApiError::js)?)
        .await
        .map_err(ApiError::js)?;
    Ok(serde_wasm_bindgen::from_value(value)?)
}

async fn status_error(resp: &Response) -> ApiError {
    let status = resp.status();
    let text = match resp.text() {
        Ok(promise) => JsFuture::from(promise).await.ok().and_then(|v| v.as_string()),
        Err(_) => None,
    };
    ApiError::Status {
        status,
        detail: text.as_deref().and_then(parse_error_detail),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Pull `detail` out of an error body. Validation errors send a list, which
/// is passed through as JSON text.
fn parse_error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

pub async fn get_json<T: DeserializeOwned>(config: &Config, path: &str) -> ApiResult<T> {
    let resp = send(config, Method::Get, path, None).await?;
    read_json(&resp).await
}

pub async fn send_json<B, T>(config: &Config, method: Method, path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = serde_json::to_string(body)?;
    let resp = send(config, method, path, Some(body)).await?;
    read_json(&resp).await
}

/// Request without a body whose response content is not needed
pub async fn call(config: &Config, method: Method, path: &str) -> ApiResult<()> {
    send(config, method, path, None).await.map(|_| ())
}

pub async fn get_blob(config: &Config, path: &str) -> ApiResult<web_sys::Blob> {
    let resp = send(config, Method::Get, path, None).await?;
    let value = JsFuture::from(resp.blob().map_err(ApiError::js)?)
        .await
        .map_err(ApiError::js)?;
    value.dyn_into().map_err(ApiError::js)
}
