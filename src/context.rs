//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Product shown in the detail panel - read
    pub selected_product: ReadSignal<Option<u64>>,
    /// Product shown in the detail panel - write
    set_selected_product: WriteSignal<Option<u64>>,
}

impl AppContext {
    pub fn new(selected_product: (ReadSignal<Option<u64>>, WriteSignal<Option<u64>>)) -> Self {
        Self {
            selected_product: selected_product.0,
            set_selected_product: selected_product.1,
        }
    }

    /// Open the detail panel for a product (no-op if it is already open)
    pub fn select_product(&self, product_id: u64) {
        if self.selected_product.get_untracked() != Some(product_id) {
            self.set_selected_product.set(Some(product_id));
        }
    }

    pub fn close_detail(&self) {
        self.set_selected_product.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
