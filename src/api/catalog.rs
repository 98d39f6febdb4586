//! Catalog Lookups
//!
//! Category list plus the category-scoped brand list and price bounds.

use catalog_core::{ApiRequest, BrandList, CategoryList, PriceRange, Result};

use super::send;

pub async fn get_categories() -> Result<Vec<String>> {
    let list: CategoryList = send(ApiRequest::categories()).await?;
    Ok(list.categories)
}

/// Brands for a lookup built by `ApiRequest::brands`.
pub async fn get_brands(request: ApiRequest) -> Result<Vec<String>> {
    let list: BrandList = send(request).await?;
    Ok(list.brands)
}

/// Price bounds for a lookup built by `ApiRequest::price_range`.
pub async fn get_price_range(request: ApiRequest) -> Result<PriceRange> {
    send(request).await
}
