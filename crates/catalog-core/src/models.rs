//! Catalog Models
//!
//! Data structures matching the recommender backend's JSON bodies.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u64,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub price: f64,
    pub currency: String,
    pub rating: f64,
    #[serde(default)]
    pub num_reviews: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specs: Specs,
    #[serde(default)]
    pub sample_review: Option<String>,
    #[serde(default)]
    pub recommendation_score: Option<f64>,
}

/// Free-form specification mapping. The known keys are typed, anything else
/// the backend sends is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connectivity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Specs {
    /// Labeled spec fields that are present, in display order.
    /// Color is left out; cards render it separately with a color class.
    pub fn labeled(&self) -> Vec<(&'static str, &str)> {
        [
            ("RAM", &self.ram),
            ("Storage", &self.storage),
            ("Display", &self.display),
            ("Battery", &self.battery),
            ("Connectivity", &self.connectivity),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.labeled().is_empty() && self.color.is_none()
    }
}

/// Price bounds for the selected category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: 0.0, max: 3000.0 }
    }
}

impl PriceRange {
    pub fn clamp(&self, value: f64) -> f64 {
        if self.min > self.max {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BrandList {
    pub brands: Vec<String>,
}

/// Body of `POST /recommend`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendResponse {
    pub products: Vec<Product>,
    pub total: usize,
    #[serde(default)]
    pub filters_applied: Option<serde_json::Value>,
}

/// Body of `GET /products/:id/similar`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimilarResponse {
    #[serde(alias = "similar_products")]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// `{ "error": "..." }` sent alongside non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) fn make_product(product_id: u64, rating: f64) -> Product {
    Product {
        product_id,
        category: "laptops".to_string(),
        brand: "Dell".to_string(),
        model: format!("Model {}", product_id),
        price: 999.99,
        currency: "USD".to_string(),
        rating,
        num_reviews: 120,
        specs: Specs::default(),
        sample_review: None,
        recommendation_score: None,
    }
}
