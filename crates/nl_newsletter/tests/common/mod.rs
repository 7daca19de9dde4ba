#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use nl_core::{
    Article, ArticleSource, CacheEntryInfo, Error, InferenceModel, Newsletter, NewsletterCache,
    Result, Settings,
};
use nl_inference::ContentEngine;
use nl_newsletter::NewsletterService;
use nl_sources::SourceManager;
use nl_storage::FileCache;

/// Source that serves `count` synthetic articles and counts its calls.
pub struct CountingSource {
    pub calls: AtomicUsize,
}

impl CountingSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleSource for CountingSource {
    fn name(&self) -> &str {
        "Counting"
    }

    async fn fetch(&self, _query: &str, count: usize) -> Result<Vec<Article>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((0..count).map(article).collect())
    }
}

/// Cache whose writes always fail; reads always miss.
pub struct BrokenCache;

#[async_trait]
impl NewsletterCache for BrokenCache {
    fn location(&self) -> String {
        "broken".to_string()
    }

    async fn get(&self, _date: NaiveDate) -> Result<Option<Newsletter>> {
        Err(Error::Storage("read failed".to_string()))
    }

    async fn put(&self, _date: NaiveDate, _newsletter: &Newsletter) -> Result<()> {
        Err(Error::Storage("disk full".to_string()))
    }

    async fn exists(&self, _date: NaiveDate) -> Result<bool> {
        Ok(false)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    async fn clear_date(&self, _date: NaiveDate) -> Result<()> {
        Ok(())
    }

    async fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        Ok(vec![])
    }

    async fn entries(&self) -> Result<Vec<CacheEntryInfo>> {
        Ok(vec![])
    }
}

pub fn article(i: usize) -> Article {
    Article {
        title: format!("Upstream story {}", i),
        url: format!("https://news.test/story/{}", i),
        snippet: format!("Snippet for story {}.", i),
        thumbnail: None,
        source: "News Test".to_string(),
        published_at: None,
        full_text: None,
    }
}

pub fn settings(max_articles: usize) -> Settings {
    Settings {
        max_articles,
        ..Settings::default()
    }
}

pub async fn file_cache(dir: &Path) -> Arc<dyn NewsletterCache> {
    Arc::new(FileCache::new(dir).await.unwrap())
}

pub fn service(
    sources: SourceManager,
    model: Option<Arc<dyn InferenceModel>>,
    cache: Arc<dyn NewsletterCache>,
    settings: Settings,
) -> NewsletterService {
    NewsletterService::new(
        Arc::new(sources),
        Arc::new(ContentEngine::new(model)),
        cache,
        settings,
    )
}
