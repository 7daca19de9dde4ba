use std::sync::Arc;
use nl_core::{Article, ArticleSource, Result, Settings};
use tracing::{info, warn};
use crate::placeholder;
use crate::sources::get_sources;

/// Fetches articles from the configured providers in priority order and
/// falls back to the placeholder pool when none of them produce anything.
pub struct SourceManager {
    sources: Vec<Arc<dyn ArticleSource>>,
    placeholder_pool: Vec<Article>,
}

impl SourceManager {
    pub fn new(sources: Vec<Arc<dyn ArticleSource>>) -> Self {
        Self {
            sources,
            placeholder_pool: placeholder::default_pool(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(get_sources(settings)?))
    }

    /// Replace the built-in placeholder articles.
    pub fn with_placeholder_pool(mut self, pool: Vec<Article>) -> Self {
        self.placeholder_pool = pool;
        self
    }

    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name().to_string()).collect()
    }

    /// Never fails: provider errors are logged and the next provider is tried.
    /// The result holds at most `count` articles and is empty only when the
    /// placeholder pool is.
    pub async fn fetch(&self, query: &str, count: usize) -> Vec<Article> {
        for source in &self.sources {
            info!("📡 Fetching news from {}", source.name());
            match source.fetch(query, count).await {
                Ok(mut articles) if !articles.is_empty() => {
                    articles.truncate(count);
                    info!("✅ Got {} articles from {}", articles.len(), source.name());
                    return articles;
                }
                Ok(_) => warn!("⚠️ {} returned no articles", source.name()),
                Err(e) => warn!("❌ {} fetch failed: {}", source.name(), e),
            }
        }

        if self.sources.is_empty() {
            info!("📰 No news providers configured, using placeholder articles");
        } else {
            warn!("🔄 All news providers failed, using placeholder articles");
        }
        self.placeholder_articles(count)
    }

    pub fn placeholder_articles(&self, count: usize) -> Vec<Article> {
        placeholder::cycle(&self.placeholder_pool, count)
    }
}
