//! Product Card Component
//!
//! One product as a card: header, rating, price, specs, review excerpt and
//! match score. Clicking the card opens the detail panel.

use catalog_core::{format, Product};
use leptos::prelude::*;

use crate::components::StarRating;
use crate::context::use_app_context;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let id = product.product_id;

    let specs = (!product.specs.is_empty()).then(|| {
        let rows = product
            .specs
            .labeled()
            .into_iter()
            .map(|(label, value)| {
                let value = value.to_string();
                view! {
                    <div class="spec-item">
                        <span class="spec-label">{format!("{}:", label)}</span>
                        <span class="spec-value">{value}</span>
                    </div>
                }
            })
            .collect_view();

        let color = product.specs.color.clone().map(|color| {
            let class = format!("spec-value {}", format::color_class(&color));
            view! {
                <div class="spec-item">
                    <span class="spec-label">"Color:"</span>
                    <span class=class>{color}</span>
                </div>
            }
        });

        view! {
            <div class="product-specs">
                {rows}
                {color}
            </div>
        }
    });

    let review = product.sample_review.as_deref().and_then(format::review_excerpt).map(|text| view! {
        <div class="product-review">
            <p class="review-text">{text}</p>
        </div>
    });

    let score = format::score_percent(product.recommendation_score).map(|percent| view! {
        <div class="recommendation-score">
            <span class="score-label">"Match Score:"</span>
            <span class="score-value">{percent}</span>
        </div>
    });

    view! {
        <div class="product-card" on:click=move |_| ctx.select_product(id)>
            <div class="product-header">
                <h3 class="product-title">{product.model.clone()}</h3>
                <span class="product-brand">{product.brand.clone()}</span>
            </div>

            <div class="product-category">
                <span class="category-badge">{product.category.clone()}</span>
            </div>

            <div class="product-rating">
                <StarRating rating=product.rating />
                <span class="rating-value">{product.rating.to_string()}</span>
                <span class="reviews-count">{format::reviews_label(product.num_reviews)}</span>
            </div>

            <div class="product-price">
                <span class="currency">{product.currency.clone()}</span>
                <span class="price">{format::price(product.price)}</span>
            </div>

            {specs}
            {review}
            {score}
        </div>
    }
}
