use crate::config::Config;
use crate::error::ApiResult;
use crate::models::CatalogItem;
use super::http::{encode_component, get_json};

/// `GET /keyword-search?query=...`, unsorted as returned by the server
pub async fn keyword_search(config: &Config, query: &str) -> ApiResult<Vec<CatalogItem>> {
    let path = format!("/keyword-search?query={}", encode_component(query));
    let items: Option<Vec<CatalogItem>> = get_json(config, &path).await?;
    Ok(items.unwrap_or_default())
}
