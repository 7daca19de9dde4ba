mod common;

use std::sync::Arc;
use std::time::Duration;
use nl_core::{today, Error};
use nl_inference::DummyModel;
use nl_sources::SourceManager;
use nl_storage::MemoryCache;
use tempfile::tempdir;
use common::*;

#[tokio::test]
async fn test_demo_newsletter_is_complete_and_cached() {
    let dir = tempdir().unwrap();
    let cache = file_cache(dir.path()).await;
    let service = service(SourceManager::new(vec![]), None, cache.clone(), settings(10));

    let newsletter = service.generate(false).await.unwrap();

    assert_eq!(newsletter.total_articles, 10);
    assert_eq!(newsletter.summaries.len(), 10);
    assert_eq!(newsletter.version, "1.0");
    assert_eq!(newsletter.editorial.author, "Senior Editor");
    for summary in &newsletter.summaries {
        assert!(summary.id.starts_with("summary_"));
        assert!((0.7..=0.95).contains(&summary.relevance_score));
    }

    let cached = cache.get(today()).await.unwrap();
    assert_eq!(cached, Some(newsletter));
}

#[tokio::test]
async fn test_second_call_is_served_from_cache() {
    let dir = tempdir().unwrap();
    let source = CountingSource::new();
    let service = service(
        SourceManager::new(vec![source.clone()]),
        None,
        file_cache(dir.path()).await,
        settings(4),
    );

    let first = service.generate(false).await.unwrap();
    let second = service.generate(false).await.unwrap();

    assert_eq!(source.calls(), 1);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.summaries[0].original_article.title, "Upstream story 0");
}

#[tokio::test]
async fn test_force_refresh_overwrites_entry() {
    let cache = Arc::new(MemoryCache::new());
    let source = CountingSource::new();
    let service = service(
        SourceManager::new(vec![source.clone()]),
        None,
        cache.clone(),
        settings(3),
    );

    let first = service.generate(false).await.unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    let refreshed = service.generate(true).await.unwrap();

    assert!(refreshed.generated_at > first.generated_at);
    assert_eq!(source.calls(), 2);
    let cached = nl_core::NewsletterCache::get(cache.as_ref(), today()).await.unwrap();
    assert_eq!(cached, Some(refreshed));
}

#[tokio::test]
async fn test_model_output_flows_into_newsletter() {
    let model = Arc::new(DummyModel::with_reply(
        "TITLE: Model Title\nSUMMARY: Model summary.\nCONTENT: Model body.\nTHEME: Agents\nRELEVANCE: 0.75",
    ));
    let service = service(
        SourceManager::new(vec![]),
        Some(model.clone()),
        Arc::new(MemoryCache::new()),
        settings(2),
    );

    let newsletter = service.generate(false).await.unwrap();

    // two summaries and one editorial
    assert_eq!(model.calls(), 3);
    assert!(newsletter.summaries.iter().all(|s| s.catchy_title == "Model Title"));
    assert!(newsletter.summaries.iter().all(|s| s.relevance_score == 0.75));
    assert_eq!(newsletter.editorial.content, "Model body.");
    assert_eq!(newsletter.editorial.theme, "Agents");
    assert_eq!(newsletter.editorial.author, "Senior Editor");
}

#[tokio::test]
async fn test_failing_model_still_produces_newsletter() {
    let service = service(
        SourceManager::new(vec![]),
        Some(Arc::new(DummyModel::failing())),
        Arc::new(MemoryCache::new()),
        settings(5),
    );

    let newsletter = service.generate(false).await.unwrap();
    assert_eq!(newsletter.total_articles, 5);
    assert_eq!(newsletter.editorial.theme, "AI Innovation and Future Trends");
}

#[tokio::test]
async fn test_empty_placeholder_pool_is_fatal() {
    let cache = Arc::new(MemoryCache::new());
    let service = service(
        SourceManager::new(vec![]).with_placeholder_pool(vec![]),
        None,
        cache.clone(),
        settings(10),
    );

    let result = service.generate(false).await;
    assert!(matches!(result, Err(Error::NoArticles)));
    assert!(service.archive_dates().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cache_failures_do_not_block_generation() {
    let service = service(SourceManager::new(vec![]), None, Arc::new(BrokenCache), settings(3));
    let newsletter = service.generate(false).await.unwrap();
    assert_eq!(newsletter.total_articles, 3);
}

#[tokio::test]
async fn test_get_article_by_id() {
    let service = service(
        SourceManager::new(vec![]),
        None,
        Arc::new(MemoryCache::new()),
        settings(6),
    );

    let newsletter = service.generate(false).await.unwrap();
    let wanted = &newsletter.summaries[3];

    let found = service.get_article_by_id(&wanted.id).await.unwrap();
    assert_eq!(found.as_ref(), Some(wanted));
    assert_eq!(service.get_article_by_id("summary_missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_repeated_placeholders_share_an_id() {
    let service = service(
        SourceManager::new(vec![]),
        None,
        Arc::new(MemoryCache::new()),
        settings(13),
    );

    let newsletter = service.generate(false).await.unwrap();
    assert_eq!(newsletter.summaries.len(), 13);
    let repeat = &newsletter.summaries[10];
    assert_eq!(repeat.id, newsletter.summaries[0].id);
    assert_eq!(repeat.original_article, newsletter.summaries[0].original_article);

    // lookup resolves to the first occurrence
    let found = service.get_article_by_id(&repeat.id).await.unwrap();
    assert_eq!(found.as_ref(), Some(&newsletter.summaries[0]));
}

#[tokio::test]
async fn test_cache_status_and_clearing() {
    let dir = tempdir().unwrap();
    let service = service(
        SourceManager::new(vec![]),
        None,
        file_cache(dir.path()).await,
        settings(2),
    );

    let empty = service.get_cache_status().await.unwrap();
    assert_eq!(empty.total_cached_days, 0);
    assert!(!empty.today_cached);

    let newsletter = service.generate(false).await.unwrap();
    let status = service.get_cache_status().await.unwrap();
    assert_eq!(status.total_cached_days, 1);
    assert!(status.today_cached);
    assert_eq!(status.entries[0].date, today());
    assert_eq!(status.location, dir.path().display().to_string());

    assert_eq!(service.archive_dates().await.unwrap(), vec![today()]);
    assert_eq!(service.newsletter_for(today()).await.unwrap(), Some(newsletter));

    service.clear_cache_for(today()).await.unwrap();
    assert!(service.archive_dates().await.unwrap().is_empty());

    service.generate(false).await.unwrap();
    service.clear_cache().await.unwrap();
    assert!(!service.get_cache_status().await.unwrap().today_cached);
}
