//! Star Rating Component
//!
//! Five stars for a 0–5 rating: full, half, then empty.

use catalog_core::StarCounts;
use leptos::prelude::*;

#[component]
pub fn StarRating(rating: f64) -> impl IntoView {
    let stars = StarCounts::from_rating(rating).stars();

    view! {
        <div class="stars">
            {stars.into_iter().map(|star| view! {
                <span class=star.class()>{star.glyph()}</span>
            }).collect_view()}
        </div>
    }
}
