use catalog_core::{ApiRequest, HealthStatus, Result};

use super::send;

pub async fn health() -> Result<HealthStatus> {
    send(ApiRequest::health()).await
}
