use axum::{
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod handlers;
pub mod response;
pub mod state;

pub use response::{ApiError, ApiResponse, ErrorResponse};
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/newsletter", get(handlers::get_newsletter))
        .route("/newsletter/regenerate", post(handlers::regenerate_newsletter))
        .route("/newsletter/:article_id", get(handlers::get_article))
        .route("/cache", get(handlers::cache_status).delete(handlers::clear_cache))
        .route("/cache/:date", delete(handlers::clear_cache_for_date))
        .route("/archive", get(handlers::list_archive))
        .route("/archive/:date", get(handlers::get_archived))
        .route("/config", get(handlers::get_config));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState, addr: SocketAddr) -> nl_core::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use nl_core::{Error, Newsletter, Result};
    pub use crate::AppState;
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use nl_core::{NewsletterCache, Settings};
    use nl_inference::ContentEngine;
    use nl_newsletter::NewsletterService;
    use nl_sources::SourceManager;
    use nl_storage::MemoryCache;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_with(sources: SourceManager, cache: Arc<dyn NewsletterCache>) -> Router {
        let settings = Settings {
            max_articles: 3,
            ..Settings::default()
        };
        let service = NewsletterService::new(
            Arc::new(sources),
            Arc::new(ContentEngine::new(None)),
            cache,
            settings,
        );
        create_app(AppState::new(Arc::new(service)))
    }

    fn app() -> Router {
        app_with(SourceManager::new(vec![]), Arc::new(MemoryCache::new()))
    }

    async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_in_demo_mode() {
        let (status, body) = call(&app(), Method::GET, "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "demo_mode");
        assert_eq!(body["data"]["mode"], "demo");
        assert_eq!(body["data"]["services"]["openai"], "disconnected");
    }

    #[tokio::test]
    async fn test_newsletter_and_article_lookup() {
        let app = app();
        let (status, body) = call(&app, Method::GET, "/api/v1/newsletter").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total_articles"], 3);
        assert_eq!(body["data"]["editorial"]["author"], "Senior Editor");

        let id = body["data"]["summaries"][1]["id"].as_str().unwrap().to_string();
        let (status, article) = call(&app, Method::GET, &format!("/api/v1/newsletter/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(article["data"]["id"], id.as_str());
        assert_eq!(article["data"]["title"], body["data"]["summaries"][1]["catchy_title"]);
    }

    #[tokio::test]
    async fn test_unknown_article_is_404() {
        let (status, body) = call(&app(), Method::GET, "/api/v1/newsletter/summary_nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "ArticleNotFoundError");
        assert_eq!(body["details"]["article_id"], "summary_nope");
    }

    #[tokio::test]
    async fn test_regenerate_replaces_cached_newsletter() {
        let app = app();
        let (_, first) = call(&app, Method::GET, "/api/v1/newsletter").await;
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        let (status, second) = call(&app, Method::POST, "/api/v1/newsletter/regenerate").await;
        assert_eq!(status, StatusCode::OK);
        assert_ne!(first["data"]["generated_at"], second["data"]["generated_at"]);

        let (_, cached) = call(&app, Method::GET, "/api/v1/newsletter").await;
        assert_eq!(cached["data"], second["data"]);
    }

    #[tokio::test]
    async fn test_generation_failure_is_500() {
        let app = app_with(
            SourceManager::new(vec![]).with_placeholder_pool(vec![]),
            Arc::new(MemoryCache::new()),
        );
        let (status, body) = call(&app, Method::GET, "/api/v1/newsletter").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "NewsletterGenerationError");
    }

    #[tokio::test]
    async fn test_cache_and_archive_endpoints() {
        let app = app();
        let (_, status) = call(&app, Method::GET, "/api/v1/cache").await;
        assert_eq!(status["data"]["total_cached_days"], 0);
        assert_eq!(status["data"]["today_cached"], false);

        call(&app, Method::GET, "/api/v1/newsletter").await;
        let (_, archive) = call(&app, Method::GET, "/api/v1/archive").await;
        let date = archive["data"][0].as_str().unwrap().to_string();
        assert_eq!(date, nl_core::today().to_string());

        let (status, archived) = call(&app, Method::GET, &format!("/api/v1/archive/{}", date)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(archived["data"]["total_articles"], 3);

        let (status, _) = call(&app, Method::DELETE, &format!("/api/v1/cache/{}", date)).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = call(&app, Method::GET, &format!("/api/v1/archive/{}", date)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = call(&app, Method::DELETE, "/api/v1/cache").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], Value::Null);
    }

    #[tokio::test]
    async fn test_malformed_date_is_400() {
        let (status, body) = call(&app(), Method::GET, "/api/v1/archive/yesterday").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "InvalidDateError");
    }

    #[tokio::test]
    async fn test_config_hides_secrets() {
        let (status, body) = call(&app(), Method::GET, "/api/v1/config").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["app_name"], "AI News Newsletter");
        assert_eq!(body["data"]["max_articles"], 3);
        assert_eq!(body["data"]["has_openai_key"], false);
        assert!(body["data"].get("openai_api_key").is_none());
    }
}
