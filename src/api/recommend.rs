use catalog_core::{ApiRequest, FilterCriteria, RecommendResponse, Result};

use super::send;

/// `POST /recommend` with the given criteria.
pub async fn get_recommendations(criteria: &FilterCriteria) -> Result<RecommendResponse> {
    send(ApiRequest::recommend(criteria)?).await
}
