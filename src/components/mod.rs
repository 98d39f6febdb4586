//! UI Components
//!
//! Leptos components for the filter sidebar and the results area.

mod filter_panel;
mod loading_spinner;
mod product_card;
mod product_detail;
mod product_list;
mod star_rating;
mod status_badge;

pub use filter_panel::FilterPanel;
pub use loading_spinner::LoadingSpinner;
pub use product_card::ProductCard;
pub use product_detail::ProductDetail;
pub use product_list::ProductList;
pub use star_rating::StarRating;
pub use status_badge::StatusBadge;
