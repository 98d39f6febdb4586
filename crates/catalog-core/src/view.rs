//! Results View Model
//!
//! Result set plus loading and error state for the main content area.

use crate::models::{Product, RecommendResponse};

pub const INITIAL_LOAD_FAILED: &str = "Failed to load products. Please try again.";
pub const RECOMMEND_FAILED: &str = "Failed to load recommendations. Please try again.";

/// What the main content area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    Welcome,
    Loading,
    Error,
    Results,
    /// A finished search that matched nothing
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsModel {
    pub products: Vec<Product>,
    pub total: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub has_searched: bool,
}

impl ResultsModel {
    /// A request went out. Clears any previous error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the displayed results wholesale.
    pub fn succeed(&mut self, response: RecommendResponse) {
        self.products = response.products;
        self.total = response.total;
        self.has_searched = true;
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn view(&self) -> ResultsView {
        if self.error.is_some() {
            ResultsView::Error
        } else if self.loading {
            ResultsView::Loading
        } else if !self.has_searched {
            ResultsView::Welcome
        } else if self.products.is_empty() {
            ResultsView::Empty
        } else {
            ResultsView::Results
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_product;

    fn response(count: u64) -> RecommendResponse {
        RecommendResponse {
            products: (1..=count).map(|id| make_product(id, 4.0)).collect(),
            total: count as usize,
            filters_applied: None,
        }
    }

    #[test]
    fn test_starts_on_welcome() {
        assert_eq!(ResultsModel::default().view(), ResultsView::Welcome);
    }

    #[test]
    fn test_loading_to_results() {
        let mut model = ResultsModel::default();
        model.begin();
        assert_eq!(model.view(), ResultsView::Loading);

        model.succeed(response(3));
        assert_eq!(model.view(), ResultsView::Results);
        assert_eq!(model.products.len(), 3);
        assert_eq!(model.total, 3);
    }

    #[test]
    fn test_loading_to_error() {
        let mut model = ResultsModel::default();
        model.begin();
        model.fail(RECOMMEND_FAILED);
        assert_eq!(model.view(), ResultsView::Error);
        assert!(!model.loading);
        assert_eq!(model.error.as_deref(), Some(RECOMMEND_FAILED));
    }

    #[test]
    fn test_empty_result_set_is_empty_state() {
        let mut model = ResultsModel::default();
        model.begin();
        model.succeed(response(0));
        assert_eq!(model.view(), ResultsView::Empty);
    }

    #[test]
    fn test_new_results_replace_old() {
        let mut model = ResultsModel::default();
        model.begin();
        model.succeed(response(5));
        model.begin();
        model.succeed(response(2));
        assert_eq!(model.products.len(), 2);
        assert_eq!(model.products[0].product_id, 1);
        assert_eq!(model.total, 2);
    }

    #[test]
    fn test_retry_clears_error() {
        let mut model = ResultsModel::default();
        model.begin();
        model.fail(INITIAL_LOAD_FAILED);

        model.begin();
        assert_eq!(model.error, None);
        assert_eq!(model.view(), ResultsView::Loading);
    }

    #[test]
    fn test_late_response_overwrites() {
        // No cancellation: whichever response lands last is displayed.
        let mut model = ResultsModel::default();
        model.begin();
        model.begin();
        model.succeed(response(1));
        model.succeed(response(4));
        assert_eq!(model.products.len(), 4);
    }
}
