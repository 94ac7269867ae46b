use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use super::http::get_blob;

/// Object URL for the letterhead logo. The caller must revoke it.
pub async fn logo_object_url(config: &Config) -> ApiResult<String> {
    let blob = get_blob(config, &config.logo_path).await?;
    web_sys::Url::create_object_url_with_blob(&blob).map_err(ApiError::js)
}

pub fn revoke_object_url(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        log::warn!("failed to revoke {}: {:?}", url, e);
    }
}
