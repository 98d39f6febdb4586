//! Product List Component
//!
//! Grid of product cards, or the empty state when nothing matched.

use catalog_core::{format, Product};
use leptos::prelude::*;

use crate::components::ProductCard;

#[component]
pub fn ProductList(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] total: Signal<usize>,
) -> impl IntoView {
    let is_empty = Memo::new(move |_| products.with(|p| p.is_empty()));

    move || {
        if is_empty.get() {
            view! {
                <div class="product-list-empty">
                    <div class="empty-state">
                        <h3>"No products found"</h3>
                        <p>"Try adjusting your filters to see more results"</p>
                    </div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="product-list-container">
                    <div class="product-list-header">
                        <h2>"Recommended Products"</h2>
                        <span class="product-count">{move || format::total_label(total.get())}</span>
                    </div>
                    <div class="product-list-grid">
                        <For
                            each=move || products.get()
                            key=|product| product.product_id
                            children=|product| view! { <ProductCard product=product /> }
                        />
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
