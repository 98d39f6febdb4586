//! Runtime Configuration
//!
//! Resolves the backend URL and log level once per page load.
//! Precedence: `<meta name="catalog-api-url">` in the host page, then the
//! `CATALOG_API_URL` build variable, then the built-in default.

use std::sync::OnceLock;

use catalog_core::ApiConfig;
use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

const API_URL_META: &str = "catalog-api-url";

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Configuration for this page, resolved on first use.
pub fn api_config() -> &'static ApiConfig {
    CONFIG.get_or_init(|| resolve(meta_content(API_URL_META)))
}

fn resolve(meta_url: Option<String>) -> ApiConfig {
    ApiConfig::resolve(
        [meta_url.as_deref(), option_env!("CATALOG_API_URL")],
        option_env!("CATALOG_LOG_LEVEL"),
    )
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    let meta = element.dyn_into::<HtmlMetaElement>().ok()?;
    Some(meta.content())
}
