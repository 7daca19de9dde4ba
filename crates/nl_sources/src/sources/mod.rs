use std::sync::Arc;
use std::time::Duration;
use nl_core::{ArticleSource, Result, Settings};
use reqwest::Client;

pub mod newsapi;
pub mod serpapi;

pub use newsapi::NewsApiSource;
pub use serpapi::SerpApiSource;

const USER_AGENT: &str = concat!("ai-newsletter/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for provider calls.
pub fn build_client(timeout_secs: u64) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

/// Returns the configured providers in priority order (SerpAPI, then NewsAPI).
pub fn get_sources(settings: &Settings) -> Result<Vec<Arc<dyn ArticleSource>>> {
    let client = build_client(settings.request_timeout_secs)?;
    let mut sources: Vec<Arc<dyn ArticleSource>> = Vec::new();

    if let Some(key) = settings.serpapi_key() {
        sources.push(Arc::new(SerpApiSource::new(client.clone(), key.to_string())));
    }
    if let Some(key) = settings.newsapi_key() {
        sources.push(Arc::new(NewsApiSource::new(client, key.to_string())));
    }

    Ok(sources)
}

/// Common utilities for provider adapters
pub(crate) mod utils {
    use chrono::{DateTime, NaiveDateTime, Utc};

    /// Parse a provider timestamp. Relative strings such as "9 hours ago"
    /// yield `None`.
    pub fn parse_published(value: &str) -> Option<DateTime<Utc>> {
        let value = value.trim();
        if let Ok(date) = DateTime::parse_from_rfc3339(value) {
            return Some(date.with_timezone(&Utc));
        }
        if let Ok(date) = DateTime::parse_from_rfc2822(value) {
            return Some(date.with_timezone(&Utc));
        }
        // Google News via SerpAPI: "11/13/2024, 08:00 AM, +0000 UTC"
        let trimmed = value.trim_end_matches(" UTC");
        if let Ok(date) = DateTime::parse_from_str(trimmed, "%m/%d/%Y, %I:%M %p, %z") {
            return Some(date.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Keep only non-blank strings, trimmed.
    pub fn non_empty(value: Option<String>) -> Option<String> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
