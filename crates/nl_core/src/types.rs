use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use crate::{Error, Result};

pub const NEWSLETTER_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub source: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub full_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub id: String,
    pub original_article: Article,
    pub catchy_title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub relevance_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Editorial {
    pub title: String,
    pub content: String,
    pub theme: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Newsletter {
    pub editorial: Editorial,
    pub summaries: Vec<Summary>,
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub total_articles: usize,
}

impl Newsletter {
    pub fn new(editorial: Editorial, summaries: Vec<Summary>) -> Self {
        Self {
            total_articles: summaries.len(),
            editorial,
            summaries,
            generated_at: Utc::now(),
            version: NEWSLETTER_VERSION.to_string(),
        }
    }

    pub fn find_summary(&self, id: &str) -> Option<&Summary> {
        self.summaries.iter().find(|s| s.id == id)
    }
}

/// Size and timestamp of one dated cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntryInfo {
    pub date: NaiveDate,
    pub file_name: String,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStatus {
    pub location: String,
    pub total_cached_days: usize,
    pub today_cached: bool,
    pub entries: Vec<CacheEntryInfo>,
}

/// Flattened view of a summary together with its source article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub url: String,
    pub thumbnail: Option<String>,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
    pub relevance_score: f64,
}

impl From<&Summary> for ArticleDetail {
    fn from(summary: &Summary) -> Self {
        let article = &summary.original_article;
        Self {
            id: summary.id.clone(),
            title: summary.catchy_title.clone(),
            summary: summary.summary.clone(),
            key_points: summary.key_points.clone(),
            url: article.url.clone(),
            thumbnail: article.thumbnail.clone(),
            source: article.source.clone(),
            published_at: article.published_at,
            relevance_score: summary.relevance_score,
        }
    }
}

/// Stable summary identifier: `summary_` followed by five digits taken from a
/// SHA-256 of the title and URL.
pub fn summary_id(title: &str, url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(url.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    format!("summary_{:05}", u64::from_be_bytes(prefix) % 100_000)
}

/// The current calendar date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| Error::InvalidDate(format!("{}: {}", value, e)))
}
