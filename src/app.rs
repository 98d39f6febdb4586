//! Electronics Recommender App
//!
//! Root component: header, filter sidebar, and the results area that
//! switches between welcome, loading, error and result views.

use catalog_core::view::{INITIAL_LOAD_FAILED, RECOMMEND_FAILED};
use catalog_core::{FilterCriteria, ResultsView};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{FilterPanel, LoadingSpinner, ProductDetail, ProductList, StatusBadge};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, AppStore};

/// Issue a recommendation query and fold the outcome into the store.
///
/// In-flight queries are never cancelled, so whichever answer lands last wins.
fn run_query(store: AppStore, criteria: FilterCriteria, failure_message: &'static str) {
    store.results().write().begin();
    spawn_local(async move {
        match api::get_recommendations(&criteria).await {
            Ok(response) => {
                log::info!("[App] Loaded {} of {} products", response.products.len(), response.total);
                if let Some(applied) = &response.filters_applied {
                    log::debug!("[App] Backend applied filters: {}", applied);
                }
                store.results().write().succeed(response);
            }
            Err(e) => {
                log::error!("[App] {} ({})", failure_message, e);
                store.results().write().fail(failure_message);
            }
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let store: AppStore = Store::new(AppState::default());
    let (selected_product, set_selected_product) = signal::<Option<u64>>(None);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((selected_product, set_selected_product)));

    // Retry repeats this default query, not the last filtered one.
    let load_initial = move || run_query(store, FilterCriteria::default_query(), INITIAL_LOAD_FAILED);

    let apply_filters = Callback::new(move |criteria: FilterCriteria| {
        run_query(store, criteria, RECOMMEND_FAILED);
    });

    // Load default recommendations on mount
    Effect::new(move |_| load_initial());

    let is_loading = Signal::derive(move || store.results().read().loading);
    let products = Signal::derive(move || store.results().read().products.clone());
    let total = Signal::derive(move || store.results().read().total);

    let content = move || {
        let current = store.results().read().view();
        match current {
            ResultsView::Error => {
                let message = store.results().read().error.clone().unwrap_or_default();
                view! {
                    <div class="error-message">
                        <p>{message}</p>
                        <button class="retry-btn" on:click=move |_| load_initial()>
                            "Retry"
                        </button>
                    </div>
                }
                .into_any()
            }
            ResultsView::Loading => view! { <LoadingSpinner /> }.into_any(),
            ResultsView::Welcome => view! {
                <div class="welcome-message">
                    <h2>"Welcome to Electronics Recommender"</h2>
                    <p>"Use the filters on the left to find your perfect product"</p>
                </div>
            }
            .into_any(),
            ResultsView::Results | ResultsView::Empty => {
                view! { <ProductList products=products total=total /> }.into_any()
            }
        }
    };

    view! {
        <div class="app">
            <header class="app-header">
                <div class="header-content">
                    <h1>"Electronics Product Recommender"</h1>
                    <p class="header-subtitle">"Find the perfect product for your needs"</p>
                </div>
                <StatusBadge />
            </header>

            <div class="app-container">
                <aside class="sidebar">
                    <FilterPanel on_apply=apply_filters is_loading=is_loading />
                </aside>

                <main class="main-content">
                    {content}
                </main>
            </div>

            <ProductDetail />
        </div>
    }
}
