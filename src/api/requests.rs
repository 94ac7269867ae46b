//! Request Endpoints
//!
//! Create, list, update and soft-delete requisitions.

use crate::config::Config;
use crate::error::ApiResult;
use crate::models::{LineItem, RequestRecord, SubmitReceipt};
use super::http::{call, encode_component, get_json, send_json, Method};

fn request_path(control_number: &str) -> String {
    format!("/requests/{}", encode_component(control_number))
}

/// All requests, newest first
pub async fn list_requests(config: &Config) -> ApiResult<Vec<RequestRecord>> {
    let records: Option<Vec<RequestRecord>> = get_json(config, "/requests").await?;
    Ok(records.unwrap_or_default())
}

pub async fn create_request(config: &Config, items: &[LineItem]) -> ApiResult<SubmitReceipt> {
    send_json(config, Method::Post, "/requests", items).await
}

pub async fn update_request(config: &Config, control_number: &str, items: &[LineItem]) -> ApiResult<SubmitReceipt> {
    send_json(config, Method::Put, &request_path(control_number), items).await
}

/// Soft delete; the record stays in history with status `deleted`
pub async fn delete_request(config: &Config, control_number: &str) -> ApiResult<()> {
    call(config, Method::Delete, &request_path(control_number)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path() {
        assert_eq!(request_path("CREQ2405001"), "/requests/CREQ2405001");
        assert_eq!(request_path("a/b"), "/requests/a%2Fb");
    }
}
