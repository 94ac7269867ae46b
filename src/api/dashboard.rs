use crate::config::Config;
use crate::error::ApiResult;
use crate::models::{DailyFrequency, TopItem};
use super::http::get_json;

/// Ten most requested items among this month's active requests
pub async fn top_items(config: &Config) -> ApiResult<Vec<TopItem>> {
    get_json(config, "/dashboard/top-items").await
}

/// Per-day request and item counts for the last thirty days
pub async fn request_frequency(config: &Config) -> ApiResult<Vec<DailyFrequency>> {
    get_json(config, "/dashboard/request-frequency").await
}
