//! Catalog Core
//!
//! Browser-independent pieces of the recommender UI: wire models, filter
//! form state, request building and the results view model.

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod rating;
pub mod request;
pub mod view;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use filter::{FilterCriteria, FilterForm, SortKey};
pub use models::{
    BrandList, CategoryList, HealthStatus, PriceRange, Product, RecommendResponse, SimilarResponse,
    Specs,
};
pub use rating::StarCounts;
pub use request::{ApiRequest, Method};
pub use view::{ResultsModel, ResultsView};
