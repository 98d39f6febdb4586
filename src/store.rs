//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use catalog_core::ResultsModel;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current result set with its loading/error flags
    pub results: ResultsModel,
    /// Outcome of the health check; None until it answers
    pub backend_online: Option<bool>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
