//! Product Lookups

use catalog_core::{ApiRequest, Product, Result, SimilarResponse};

use super::send;

pub async fn get_product(product_id: u64) -> Result<Product> {
    send(ApiRequest::product(product_id)).await
}

pub async fn get_similar_products(product_id: u64, limit: u32) -> Result<Vec<Product>> {
    let similar: SimilarResponse = send(ApiRequest::similar(product_id, limit)).await?;
    Ok(similar.products)
}
