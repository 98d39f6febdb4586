//! Product Detail Panel
//!
//! Overlay for the selected product: the full card plus similar products.
//! Both lookups run independently; a response for a product that is no
//! longer selected is dropped.

use catalog_core::config::SIMILAR_PRODUCTS_LIMIT;
use catalog_core::{format, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ProductCard;
use crate::context::use_app_context;

const DETAIL_FAILED: &str = "Failed to load product details.";

#[component]
pub fn ProductDetail() -> impl IntoView {
    let ctx = use_app_context();

    let (product, set_product) = signal::<Option<Product>>(None);
    let (similar, set_similar) = signal(Vec::<Product>::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let still_selected = move |id: u64| ctx.selected_product.get_untracked() == Some(id);

    Effect::new(move |_| {
        set_product.set(None);
        set_similar.set(Vec::new());
        set_error.set(None);

        let Some(id) = ctx.selected_product.get() else {
            return;
        };
        log::debug!("[ProductDetail] Loading product {}", id);

        spawn_local(async move {
            match api::get_product(id).await {
                Ok(loaded) if still_selected(id) => set_product.set(Some(loaded)),
                Ok(_) => {}
                Err(e) => {
                    log::error!("[ProductDetail] Error loading product {}: {}", id, e);
                    if still_selected(id) {
                        set_error.set(Some(DETAIL_FAILED.to_string()));
                    }
                }
            }
        });

        spawn_local(async move {
            match api::get_similar_products(id, SIMILAR_PRODUCTS_LIMIT).await {
                Ok(loaded) if still_selected(id) => {
                    log::info!("[ProductDetail] {} similar products for {}", loaded.len(), id);
                    set_similar.set(loaded);
                }
                Ok(_) => {}
                Err(e) => log::error!("[ProductDetail] Error loading similar products for {}: {}", id, e),
            }
        });
    });

    view! {
        <Show when=move || ctx.selected_product.get().is_some()>
            <div class="detail-overlay" on:click=move |_| ctx.close_detail()>
                <div class="detail-panel" on:click=|ev| ev.stop_propagation()>
                    <button class="detail-close-btn" on:click=move |_| ctx.close_detail()>
                        "×"
                    </button>

                    {move || error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}

                    {move || match product.get() {
                        Some(p) => view! { <ProductCard product=p /> }.into_any(),
                        None if error.with(|e| e.is_none()) => view! { <p class="loading-text">"Loading..."</p> }.into_any(),
                        None => ().into_any(),
                    }}

                    <Show when=move || similar.with(|s| !s.is_empty())>
                        <div class="similar-products">
                            <h4>"Similar Products"</h4>
                            <ul class="similar-list">
                                <For
                                    each=move || similar.get()
                                    key=|p| p.product_id
                                    children=move |p| {
                                        let id = p.product_id;
                                        view! {
                                            <li class="similar-item" on:click=move |_| ctx.select_product(id)>
                                                <span class="similar-model">{p.model}</span>
                                                <span class="similar-brand">{p.brand}</span>
                                                <span class="similar-price">{format::price(p.price)}</span>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
