//! Filter Panel Component
//!
//! Sidebar form for category, brands, price range, minimum rating and sort
//! order. Changing the category reloads the brand list and price bounds for
//! it; Apply hands the packaged criteria to the parent.

use catalog_core::{format, FilterCriteria, FilterForm, SortKey};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

/// Filter sidebar
#[component]
pub fn FilterPanel(
    #[prop(into)] on_apply: Callback<FilterCriteria>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let form = RwSignal::new(FilterForm::new());

    // Load categories on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_categories().await {
                Ok(categories) => {
                    log::info!("[FilterPanel] Loaded {} categories", categories.len());
                    form.update(|f| f.categories = categories);
                }
                Err(e) => log::error!("[FilterPanel] Error loading categories: {}", e),
            }
        });
    });

    // Brands and price bounds follow the selected category
    let selected_category = Memo::new(move |_| form.with(|f| f.selected_category.clone()));

    Effect::new(move |_| {
        let category = selected_category.get();
        log::debug!("[FilterPanel] Category is now {:?}, reloading brands and price range", category);

        let [brands_request, range_request] = form.with_untracked(FilterForm::dependent_requests);
        spawn_local(async move {
            match api::get_brands(brands_request).await {
                Ok(brands) => form.update(|f| f.set_brands(brands)),
                Err(e) => log::error!("[FilterPanel] Error loading brands: {}", e),
            }
        });

        spawn_local(async move {
            match api::get_price_range(range_request).await {
                Ok(range) => form.update(|f| f.apply_price_range(range)),
                Err(e) => log::error!("[FilterPanel] Error loading price range: {}", e),
            }
        });
    });

    let apply = move |_: web_sys::MouseEvent| {
        let criteria = form.with_untracked(FilterForm::to_criteria);
        log::debug!("[FilterPanel] Applying {:?}", criteria);
        on_apply.run(criteria);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-header">
                <h2>"Filters"</h2>
                <button class="reset-btn" on:click=move |_| form.update(FilterForm::reset)>
                    "Reset All"
                </button>
            </div>

            // Category
            <div class="filter-section">
                <label class="filter-label">"Category"</label>
                <select
                    class="filter-select"
                    prop:value=move || selected_category.get().unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.select_category(Some(value)));
                    }
                >
                    <option value="">"All Categories"</option>
                    {move || form.with(|f| f.categories.clone()).into_iter().map(|category| {
                        let label = format::capitalize(&category);
                        view! { <option value=category>{label}</option> }
                    }).collect_view()}
                </select>
            </div>

            // Brands
            <div class="filter-section">
                <label class="filter-label">"Brands"</label>
                <div class="brand-list">
                    <Show when=move || form.with(|f| f.brands.is_empty())>
                        <p class="no-data">"No brands available"</p>
                    </Show>
                    <For
                        each=move || form.with(|f| f.brands.clone())
                        key=|brand| brand.clone()
                        children=move |brand| {
                            let checked_brand = brand.clone();
                            let toggled_brand = brand.clone();
                            view! {
                                <label class="checkbox-label">
                                    <input
                                        type="checkbox"
                                        class="checkbox-input"
                                        prop:checked=move || form.with(|f| f.is_brand_selected(&checked_brand))
                                        on:change=move |_| form.update(|f| f.toggle_brand(&toggled_brand))
                                    />
                                    <span class="checkbox-text">{brand}</span>
                                </label>
                            }
                        }
                    />
                </div>
            </div>

            // Price range
            <div class="filter-section">
                <label class="filter-label">
                    {move || form.with(|f| format::price_range_label(f.min_price, f.max_price))}
                </label>
                <div class="range-inputs">
                    <input
                        type="range"
                        class="range-slider"
                        min=move || form.with(|f| f.price_range.min.to_string())
                        max=move || form.with(|f| f.price_range.max.to_string())
                        prop:value=move || form.with(|f| f.min_price.to_string())
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                form.update(|f| f.set_min_price(value));
                            }
                        }
                    />
                    <input
                        type="range"
                        class="range-slider"
                        min=move || form.with(|f| f.price_range.min.to_string())
                        max=move || form.with(|f| f.price_range.max.to_string())
                        prop:value=move || form.with(|f| f.max_price.to_string())
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                form.update(|f| f.set_max_price(value));
                            }
                        }
                    />
                </div>
            </div>

            // Minimum rating
            <div class="filter-section">
                <label class="filter-label">
                    {move || form.with(|f| format::rating_label(f.min_rating))}
                </label>
                <input
                    type="range"
                    class="range-slider"
                    min="0"
                    max="5"
                    step="0.5"
                    prop:value=move || form.with(|f| f.min_rating.to_string())
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                            form.update(|f| f.set_min_rating(value));
                        }
                    }
                />
                <div class="rating-labels">
                    <span>"0"</span>
                    <span>"2.5"</span>
                    <span>"5"</span>
                </div>
            </div>

            // Sort order
            <div class="filter-section">
                <label class="filter-label">"Sort By"</label>
                <select
                    class="filter-select"
                    prop:value=move || form.with(|f| f.sort_by.as_str())
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<SortKey>() {
                            Ok(key) => form.update(|f| f.set_sort_by(key)),
                            Err(e) => log::warn!("[FilterPanel] {}", e),
                        }
                    }
                >
                    {SortKey::ALL.into_iter().map(|key| view! {
                        <option value=key.as_str()>{key.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <button
                class="apply-btn"
                disabled=move || is_loading.get()
                on:click=apply
            >
                {move || if is_loading.get() { "Loading..." } else { "Apply Filters" }}
            </button>
        </div>
    }
}
