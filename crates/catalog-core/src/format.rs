//! Display Helpers
//!
//! Text formatting shared by the filter panel and product cards.

/// Separator the dataset uses between concatenated reviews.
const REVIEW_SEPARATOR: &str = "||";

/// `$1299.00`
pub fn price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Match score as a percentage, hidden when absent or zero.
pub fn score_percent(score: Option<f64>) -> Option<String> {
    score
        .filter(|s| *s != 0.0 && !s.is_nan())
        .map(|s| format!("{:.1}%", s * 100.0))
}

/// `laptops` -> `Laptops`
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First review out of a `||`-joined sample, trimmed.
pub fn review_excerpt(sample: &str) -> Option<String> {
    let first = sample.split(REVIEW_SEPARATOR).next().unwrap_or_default().trim();
    (!first.is_empty()).then(|| first.to_string())
}

/// CSS class for a spec color value.
pub fn color_class(color: &str) -> String {
    let color = color.trim();
    if color.is_empty() {
        return "color-default".to_string();
    }
    format!("color-{}", color.to_lowercase().replace(char::is_whitespace, "-"))
}

/// Whole dollars, halves rounded up.
pub fn price_range_label(min: f64, max: f64) -> String {
    format!("Price Range: ${:.0} - ${:.0}", min.round(), max.round())
}

pub fn rating_label(min_rating: f64) -> String {
    format!("Minimum Rating: {}", min_rating)
}

pub fn reviews_label(num_reviews: u64) -> String {
    format!("({} reviews)", num_reviews)
}

pub fn total_label(total: usize) -> String {
    format!("{} products found", total)
}
