use std::sync::Arc;
use chrono::NaiveDate;
use nl_core::{today, CacheStatus, Error, Newsletter, NewsletterCache, Result, Settings, Summary};
use nl_inference::{create_model, ContentEngine};
use nl_sources::SourceManager;
use nl_storage::create_cache;
use tracing::{error, info, warn};

/// Runs the fetch, summarize, edit and cache pipeline for the current day.
pub struct NewsletterService {
    sources: Arc<SourceManager>,
    engine: Arc<ContentEngine>,
    cache: Arc<dyn NewsletterCache>,
    settings: Settings,
}

impl NewsletterService {
    pub fn new(
        sources: Arc<SourceManager>,
        engine: Arc<ContentEngine>,
        cache: Arc<dyn NewsletterCache>,
        settings: Settings,
    ) -> Self {
        Self {
            sources,
            engine,
            cache,
            settings,
        }
    }

    /// Wire up providers, model and cache from `settings`.
    pub async fn from_settings(settings: Settings) -> Result<Self> {
        let sources = SourceManager::from_settings(&settings)?;
        let engine = ContentEngine::new(create_model(&settings)?);
        let cache = create_cache(&settings.cache_backend, &settings.cache_dir).await?;
        info!(
            "Newsletter service ready in {} mode (sources: {:?}, cache: {})",
            settings.mode(),
            sources.source_names(),
            cache.location()
        );
        Ok(Self::new(Arc::new(sources), Arc::new(engine), cache, settings))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sources(&self) -> &SourceManager {
        &self.sources
    }

    pub fn engine(&self) -> &ContentEngine {
        &self.engine
    }

    /// Today's newsletter, from the cache unless `force_refresh` is set.
    pub async fn generate(&self, force_refresh: bool) -> Result<Newsletter> {
        let date = today();

        if force_refresh {
            info!("🔄 Force refresh requested for {}", date);
        } else {
            match self.cache.get(date).await {
                Ok(Some(cached)) => {
                    info!("📦 Returning cached newsletter for {}", date);
                    return Ok(cached);
                }
                Ok(None) => info!("🆕 No cached newsletter for {}, generating", date),
                Err(e) => warn!("⚠️ Cache read failed for {}, generating: {}", date, e),
            }
        }

        let count = self.settings.max_articles;
        info!("📰 Fetching up to {} articles", count);
        let mut articles = self.sources.fetch(&self.settings.news_query, count).await;
        if articles.is_empty() {
            // Unreachable while the manager keeps its own placeholder fallback.
            warn!("⚠️ No articles from sources, using placeholder data");
            articles = self.sources.placeholder_articles(count);
        }
        if articles.is_empty() {
            error!("❌ No articles found even with placeholder data");
            return Err(Error::NoArticles);
        }

        info!("🤖 Summarizing {} articles", articles.len());
        let mut summaries: Vec<Summary> = Vec::with_capacity(articles.len());
        for article in &articles {
            summaries.push(self.engine.summarize(article).await);
        }

        info!("✍️ Writing editorial");
        let editorial = self.engine.edit(&summaries).await;
        let newsletter = Newsletter::new(editorial, summaries);

        if let Err(e) = self.cache.put(date, &newsletter).await {
            error!("❌ Failed to cache newsletter for {}: {}", date, e);
        }

        info!(
            "✅ Newsletter generated with {} articles",
            newsletter.total_articles
        );
        Ok(newsletter)
    }

    pub async fn get_article_by_id(&self, id: &str) -> Result<Option<Summary>> {
        let newsletter = self.generate(false).await?;
        Ok(newsletter.find_summary(id).cloned())
    }

    pub async fn get_cache_status(&self) -> Result<CacheStatus> {
        let entries = self.cache.entries().await?;
        let today_cached = self.cache.exists(today()).await?;
        Ok(CacheStatus {
            location: self.cache.location(),
            total_cached_days: entries.len(),
            today_cached,
            entries,
        })
    }

    pub async fn clear_cache(&self) -> Result<()> {
        self.cache.clear().await?;
        info!("🗑️ Newsletter cache cleared");
        Ok(())
    }

    pub async fn clear_cache_for(&self, date: NaiveDate) -> Result<()> {
        self.cache.clear_date(date).await?;
        info!("🗑️ Cached newsletter for {} cleared", date);
        Ok(())
    }

    /// Dates with a cached newsletter, newest first.
    pub async fn archive_dates(&self) -> Result<Vec<NaiveDate>> {
        self.cache.list_dates().await
    }

    pub async fn newsletter_for(&self, date: NaiveDate) -> Result<Option<Newsletter>> {
        self.cache.get(date).await
    }
}
