//! Print Frame
//!
//! Loads the rendered form into an invisible iframe and opens the print dialog.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlIFrameElement;

use crate::api;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::RequestRecord;
use super::render_document;

fn mount_frame(html: &str) -> ApiResult<HtmlIFrameElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Js("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ApiError::Js("no body".to_string()))?;

    let iframe: HtmlIFrameElement = document
        .create_element("iframe")
        .map_err(ApiError::js)?
        .dyn_into()
        .map_err(|_| ApiError::Js("created element is not an iframe".to_string()))?;

    let style = iframe.style();
    for (name, value) in [("position", "absolute"), ("width", "0"), ("height", "0"), ("border", "0")] {
        style.set_property(name, value).map_err(ApiError::js)?;
    }
    iframe.set_srcdoc(html);
    body.append_child(&iframe).map_err(ApiError::js)?;
    Ok(iframe)
}

/// Print one request. A missing logo is logged and the form prints without it.
pub async fn print_request(config: &Config, record: &RequestRecord) -> ApiResult<()> {
    let logo_url = match api::logo_object_url(config).await {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("printing {} without logo: {}", record.control_number, e);
            None
        }
    };

    let html = render_document(record, &config.letterhead, logo_url.as_deref(), config.rows_per_page);
    let iframe = match mount_frame(&html) {
        Ok(iframe) => iframe,
        Err(e) => {
            if let Some(url) = &logo_url {
                api::revoke_object_url(url);
            }
            return Err(e);
        }
    };

    let control_number = record.control_number.clone();
    // give the frame time to lay out and decode the logo
    Timeout::new(config.print_delay_ms, move || {
        match iframe.content_window() {
            Some(window) => {
                let _ = window.focus();
                // blocks until the dialog is dismissed
                if let Err(e) = window.print() {
                    log::error!("print dialog for {} failed: {:?}", control_number, e);
                }
            }
            None => log::error!("print frame for {} has no window", control_number),
        }
        if let Some(url) = &logo_url {
            api::revoke_object_url(url);
        }
        iframe.remove();
    })
    .forget();

    log::info!("printing {}", record.control_number);
    Ok(())
}
