//! Backend API Client
//!
//! Typed wrappers around the recommender HTTP API, organized by resource.
//! Each function issues exactly one request: no retries, no caching.

mod catalog;
mod health;
mod products;
mod recommend;

use catalog_core::request::decode;
use catalog_core::{ApiError, ApiRequest, Method, Result};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::config::api_config;

pub use catalog::*;
pub use health::*;
pub use products::*;
pub use recommend::*;

/// Send a request built by `catalog_core` and decode the JSON reply.
async fn send<T: DeserializeOwned>(request: ApiRequest) -> Result<T> {
    let url = request.url(api_config().base_url());
    let label = request.to_string();
    log::debug!("[Api] {}", label);

    let builder = match request.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
    };
    let builder = match request.content_type() {
        Some(content_type) => builder.header("Content-Type", content_type),
        None => builder,
    };

    let sent = match request.body {
        Some(body) => match builder.body(body) {
            Ok(req) => req.send().await,
            Err(e) => return Err(ApiError::Encode(e.to_string())),
        },
        None => builder.send().await,
    };

    let response = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    log::debug!("[Api] {} -> {} ({} bytes)", label, status, text.len());
    decode(status, &text).inspect_err(|e| {
        if let Some(status) = e.status() {
            log::warn!("[Api] {} rejected with HTTP {}", label, status);
        }
    })
}
