//! API Configuration
//!
//! Where the backend lives and how loud the logger is. The browser crate
//! feeds in build-time and page-level overrides; this module only
//! normalizes them.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Limit for the first load and Retry
pub const DEFAULT_QUERY_LIMIT: u32 = 20;
/// Limit for queries submitted from the filter panel
pub const FILTERED_QUERY_LIMIT: u32 = 50;
/// Similar products shown in the detail panel
pub const SIMILAR_PRODUCTS_LIMIT: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    pub log_level: LevelFilter,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl ApiConfig {
    /// Build from optional overrides; the first non-blank URL wins.
    pub fn resolve<'a>(
        urls: impl IntoIterator<Item = Option<&'a str>>,
        log_level: Option<&str>,
    ) -> Self {
        let base_url = urls
            .into_iter()
            .flatten()
            .map(normalize_base_url)
            .find(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url,
            log_level: parse_log_level(log_level),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Level to start the console logger at; `None` when logging is off.
    pub fn logger_level(&self) -> Option<log::Level> {
        self.log_level.to_level()
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Unknown or missing values fall back to `Info`.
pub fn parse_log_level(level: Option<&str>) -> LevelFilter {
    level
        .map(str::trim)
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}
