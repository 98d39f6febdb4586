//! Request Building
//!
//! Describes each backend call as plain data so the browser transport only
//! has to send it, and decodes whatever comes back.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::filter::FilterCriteria;
use crate::models::ErrorBody;

/// RFC 3986 unreserved characters stay as-is in query values
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    /// JSON body, only for POST
    pub body: Option<String>,
}

impl ApiRequest {
    fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), query: Vec::new(), body: None }
    }

    fn with_query(mut self, key: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.query.push((key, value.to_string()));
        }
        self
    }

    // ========================
    // Catalog lookups
    // ========================

    pub fn categories() -> Self {
        Self::get("/categories")
    }

    pub fn brands(category: Option<&str>) -> Self {
        Self::get("/brands").with_query("category", category)
    }

    pub fn price_range(category: Option<&str>) -> Self {
        Self::get("/price-range").with_query("category", category)
    }

    // ========================
    // Recommendations & products
    // ========================

    pub fn recommend(criteria: &FilterCriteria) -> Result<Self> {
        let body = serde_json::to_string(criteria).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            method: Method::Post,
            path: "/recommend".to_string(),
            query: Vec::new(),
            body: Some(body),
        })
    }

    pub fn product(product_id: u64) -> Self {
        Self::get(format!("/products/{}", product_id))
    }

    pub fn similar(product_id: u64, limit: u32) -> Self {
        Self::get(format!("/products/{}/similar", product_id)).with_query("limit", Some(limit))
    }

    pub fn health() -> Self {
        Self::get("/health")
    }

    /// `Content-Type` to send; bodiless requests carry none so GETs stay
    /// simple cross-origin requests.
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| JSON_CONTENT_TYPE)
    }

    /// Full URL against the configured base (no trailing slash expected).
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.extend(utf8_percent_encode(value, QUERY_VALUE));
        }
        url
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url(""))
    }
}

/// Turn a finished response into `T`, or into the matching `ApiError`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(err) => err.error,
            Err(_) if body.trim().is_empty() => "empty response".to_string(),
            Err(_) => body.trim().to_string(),
        };
        return Err(ApiError::Status { status, message });
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterForm, SortKey};
    use crate::models::{CategoryList, PriceRange, Product};
    use serde_json::json;

    const BASE: &str = "http://localhost:5000/api";

    #[test]
    fn test_catalog_lookups() {
        assert_eq!(ApiRequest::categories().url(BASE), "http://localhost:5000/api/categories");
        assert_eq!(ApiRequest::brands(None).url(BASE), "http://localhost:5000/api/brands");
        assert_eq!(
            ApiRequest::brands(Some("laptops")).url(BASE),
            "http://localhost:5000/api/brands?category=laptops"
        );
        assert_eq!(
            ApiRequest::price_range(Some("smart watches")).url(BASE),
            "http://localhost:5000/api/price-range?category=smart%20watches"
        );
    }

    #[test]
    fn test_product_paths() {
        assert_eq!(ApiRequest::product(42).url(BASE), "http://localhost:5000/api/products/42");
        let similar = ApiRequest::similar(42, 5);
        assert_eq!(similar.method, Method::Get);
        assert_eq!(similar.url(BASE), "http://localhost:5000/api/products/42/similar?limit=5");
        assert_eq!(ApiRequest::health().url(&format!("{}/", BASE)), "http://localhost:5000/api/health");
    }

    #[test]
    fn test_recommend_posts_exact_filter_body() {
        let mut form = FilterForm::new();
        form.select_category(Some("laptops".to_string()));
        form.apply_price_range(PriceRange { min: 200.0, max: 3000.0 });
        form.set_min_price(500.0);
        form.set_max_price(1500.0);
        form.set_sort_by(SortKey::PriceAsc);

        let request = ApiRequest::recommend(&form.to_criteria()).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url(BASE), "http://localhost:5000/api/recommend");
        assert!(request.query.is_empty());

        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "category": "laptops",
                "min_price": 500.0,
                "max_price": 1500.0,
                "sort_by": "price_asc",
                "limit": 50
            })
        );
        assert_eq!(request.to_string(), "POST /recommend");
    }

    #[test]
    fn test_only_bodies_declare_json() {
        let request = ApiRequest::recommend(&FilterCriteria::default_query()).unwrap();
        assert_eq!(request.content_type(), Some("application/json"));

        assert_eq!(ApiRequest::categories().content_type(), None);
        assert_eq!(ApiRequest::brands(Some("laptops")).content_type(), None);
        assert_eq!(ApiRequest::similar(3, 5).content_type(), None);
    }

    #[test]
    fn test_decode_success() {
        let list: CategoryList = decode(200, r#"{"categories":["laptops","tablets"]}"#).unwrap();
        assert_eq!(list.categories, vec!["laptops", "tablets"]);
    }

    #[test]
    fn test_decode_error_body() {
        let err = decode::<Product>(404, r#"{"error":"Product not found"}"#).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 404, message: "Product not found".to_string() });
    }

    #[test]
    fn test_decode_error_without_json() {
        let err = decode::<CategoryList>(502, "Bad Gateway\n").unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502, message: "Bad Gateway".to_string() });

        let err = decode::<CategoryList>(500, "").unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode::<CategoryList>(200, r#"{"categories": "laptops"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
