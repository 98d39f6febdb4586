//! Filter State
//!
//! The filter form the user edits and the criteria object it produces for
//! `POST /recommend`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_QUERY_LIMIT, FILTERED_QUERY_LIMIT};
use crate::models::PriceRange;
use crate::request::ApiRequest;

pub const MAX_RATING: f64 = 5.0;

/// Sort orders accepted by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Score,
    Rating,
    Reviews,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Score,
        SortKey::Rating,
        SortKey::Reviews,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Score => "score",
            SortKey::Rating => "rating",
            SortKey::Reviews => "reviews",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Score => "Best Match",
            SortKey::Rating => "Highest Rating",
            SortKey::Reviews => "Most Reviews",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown sort key: {}", s))
    }
}

/// Body of `POST /recommend`. Unset optional fields are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    pub sort_by: SortKey,
    pub limit: u32,
}

impl FilterCriteria {
    /// Query issued on first load and by Retry.
    pub fn default_query() -> Self {
        Self {
            category: None,
            brands: None,
            min_price: None,
            max_price: None,
            min_rating: None,
            sort_by: SortKey::Score,
            limit: DEFAULT_QUERY_LIMIT,
        }
    }
}

/// Editable state of the filter panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterForm {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub selected_category: Option<String>,
    pub selected_brands: Vec<String>,
    pub price_range: PriceRange,
    pub min_price: f64,
    pub max_price: f64,
    pub min_rating: f64,
    pub sort_by: SortKey,
}

impl Default for FilterForm {
    fn default() -> Self {
        let price_range = PriceRange::default();
        Self {
            categories: Vec::new(),
            brands: Vec::new(),
            selected_category: None,
            selected_brands: Vec::new(),
            price_range,
            min_price: price_range.min,
            max_price: price_range.max,
            min_rating: 0.0,
            sort_by: SortKey::Score,
        }
    }
}

impl FilterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category (empty string means "All Categories").
    ///
    /// Brand selections belong to the old category, so they are dropped.
    pub fn select_category(&mut self, category: Option<String>) {
        self.selected_category = category.filter(|c| !c.is_empty());
        self.selected_brands.clear();
    }

    /// Brand list and price bounds lookups scoped to the selected category.
    pub fn dependent_requests(&self) -> [ApiRequest; 2] {
        let scope = self.selected_category.as_deref();
        [ApiRequest::brands(scope), ApiRequest::price_range(scope)]
    }

    pub fn set_brands(&mut self, brands: Vec<String>) {
        self.brands = brands;
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        if let Some(pos) = self.selected_brands.iter().position(|b| b == brand) {
            self.selected_brands.remove(pos);
        } else {
            self.selected_brands.push(brand.to_string());
        }
    }

    pub fn is_brand_selected(&self, brand: &str) -> bool {
        self.selected_brands.iter().any(|b| b == brand)
    }

    /// Store freshly loaded bounds and snap both sliders to them.
    pub fn apply_price_range(&mut self, range: PriceRange) {
        self.price_range = range;
        self.min_price = range.min;
        self.max_price = range.max;
    }

    pub fn set_min_price(&mut self, value: f64) {
        self.min_price = self.price_range.clamp(value);
    }

    pub fn set_max_price(&mut self, value: f64) {
        self.max_price = self.price_range.clamp(value);
    }

    pub fn set_min_rating(&mut self, value: f64) {
        self.min_rating = value.clamp(0.0, MAX_RATING);
    }

    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        self.sort_by = sort_by;
    }

    /// Package the form into the criteria sent to the backend.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: self.selected_category.clone(),
            brands: (!self.selected_brands.is_empty()).then(|| self.selected_brands.clone()),
            min_price: Some(self.min_price),
            max_price: Some(self.max_price),
            min_rating: (self.min_rating > 0.0).then_some(self.min_rating),
            sort_by: self.sort_by,
            limit: FILTERED_QUERY_LIMIT,
        }
    }

    /// Back to defaults, keeping the last-loaded price range.
    pub fn reset(&mut self) {
        self.selected_category = None;
        self.selected_brands.clear();
        self.min_price = self.price_range.min;
        self.max_price = self.price_range.max;
        self.min_rating = 0.0;
        self.sort_by = SortKey::Score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn laptops_form() -> FilterForm {
        let mut form = FilterForm::new();
        form.select_category(Some("laptops".to_string()));
        form.apply_price_range(PriceRange { min: 300.0, max: 2500.0 });
        form
    }

    #[test]
    fn test_sort_key_round_trips_through_select_value() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
            assert_eq!(serde_json::to_value(key).unwrap(), json!(key.as_str()));
        }
        assert!("newest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_default_query_body() {
        let body = serde_json::to_value(FilterCriteria::default_query()).unwrap();
        assert_eq!(body, json!({ "sort_by": "score", "limit": 20 }));
    }

    #[test]
    fn test_submission_omits_unset_fields() {
        let form = FilterForm::new();
        let body = serde_json::to_value(form.to_criteria()).unwrap();
        assert_eq!(
            body,
            json!({ "min_price": 0.0, "max_price": 3000.0, "sort_by": "score", "limit": 50 })
        );
    }

    #[test]
    fn test_laptops_price_asc_submission() {
        let mut form = laptops_form();
        form.set_min_price(500.0);
        form.set_max_price(1500.0);
        form.set_sort_by(SortKey::PriceAsc);

        let body = serde_json::to_value(form.to_criteria()).unwrap();
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
    }

    #[test]
    fn test_brands_and_rating_included_when_set() {
        let mut form = laptops_form();
        form.toggle_brand("Dell");
        form.toggle_brand("Apple");
        form.set_min_rating(4.5);

        let criteria = form.to_criteria();
        assert_eq!(criteria.brands, Some(vec!["Dell".to_string(), "Apple".to_string()]));
        assert_eq!(criteria.min_rating, Some(4.5));
    }

    #[test]
    fn test_category_change_clears_brands() {
        let mut form = laptops_form();
        form.toggle_brand("Dell");
        assert!(form.is_brand_selected("Dell"));

        form.select_category(Some("tablets".to_string()));
        assert_eq!(form.selected_category.as_deref(), Some("tablets"));
        assert!(form.selected_brands.is_empty());

        form.toggle_brand("Apple");
        form.select_category(Some(String::new()));
        assert_eq!(form.selected_category, None);
        assert!(form.selected_brands.is_empty());
    }

    #[test]
    fn test_category_change_rescopes_lookups() {
        let mut form = laptops_form();

        form.select_category(Some("tablets".to_string()));
        let [brands, range] = form.dependent_requests();
        assert_eq!(brands.url(""), "/brands?category=tablets");
        assert_eq!(range.url(""), "/price-range?category=tablets");

        form.select_category(None);
        let [brands, range] = form.dependent_requests();
        assert_eq!(brands.url(""), "/brands");
        assert_eq!(range.url(""), "/price-range");
    }

    #[test]
    fn test_toggle_brand_twice_deselects() {
        let mut form = FilterForm::new();
        form.toggle_brand("Sony");
        form.toggle_brand("Sony");
        assert!(form.selected_brands.is_empty());
        assert_eq!(form.to_criteria().brands, None);
    }

    #[test]
    fn test_sliders_clamp() {
        let mut form = laptops_form();
        form.set_min_price(10.0);
        form.set_max_price(9000.0);
        form.set_min_rating(7.0);
        assert_eq!(form.min_price, 300.0);
        assert_eq!(form.max_price, 2500.0);
        assert_eq!(form.min_rating, 5.0);
    }

    #[test]
    fn test_reset_uses_last_loaded_range() {
        let mut form = laptops_form();
        form.toggle_brand("Dell");
        form.set_min_price(800.0);
        form.set_min_rating(3.0);
        form.set_sort_by(SortKey::Rating);

        form.reset();

        assert_eq!(form.selected_category, None);
        assert!(form.selected_brands.is_empty());
        assert_eq!(form.min_price, 300.0);
        assert_eq!(form.max_price, 2500.0);
        assert_eq!(form.min_rating, 0.0);
        assert_eq!(form.sort_by, SortKey::Score);
    }
}
