use std::sync::Arc;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use nl_core::{parse_date, ArticleDetail, CacheStatus, Newsletter};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use crate::response::{ApiError, ApiResponse};
use crate::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Default, Deserialize)]
pub struct NewsletterQuery {
    #[serde(default)]
    pub force_refresh: bool,
}

fn connectivity(configured: bool) -> &'static str {
    if configured {
        "connected"
    } else {
        "disconnected"
    }
}

fn path_date(value: &str) -> Result<NaiveDate, ApiError> {
    parse_date(value).map_err(|e| {
        ApiError::bad_request(
            "InvalidDateError",
            "Dates must be formatted as YYYY-MM-DD",
            json!({ "date": value, "error": e.to_string() }),
        )
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> ApiResult<Value> {
    let settings = state.settings();
    let status = if !settings.has_any_news_source() {
        "demo_mode"
    } else if settings.has_openai_key() {
        "healthy"
    } else {
        "degraded"
    };

    Ok(ApiResponse::ok(
        json!({
            "status": status,
            "version": settings.app_version,
            "timestamp": Utc::now().to_rfc3339(),
            "mode": settings.mode(),
            "services": {
                "openai": connectivity(settings.has_openai_key()),
                "serpapi": connectivity(settings.has_serpapi_key()),
                "newsapi": connectivity(settings.has_newsapi_key()),
                "cache": "active",
            },
            "configuration": {
                "max_articles": settings.max_articles,
                "news_query": settings.news_query,
                "cache_backend": settings.cache_backend,
            },
        }),
        "System health check completed",
    ))
}

pub async fn get_newsletter(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsletterQuery>,
) -> ApiResult<Newsletter> {
    let newsletter = state
        .service
        .generate(query.force_refresh)
        .await
        .map_err(|e| ApiError::internal("NewsletterGenerationError", "Failed to generate newsletter", &e))?;
    Ok(ApiResponse::ok(
        newsletter,
        "Latest AI News Newsletter generated successfully",
    ))
}

pub async fn regenerate_newsletter(State(state): State<Arc<AppState>>) -> ApiResult<Newsletter> {
    info!("Initiating full newsletter regeneration");
    let newsletter = state.service.generate(true).await.map_err(|e| {
        ApiError::internal("NewsletterRegenerationError", "Failed to regenerate newsletter", &e)
    })?;
    Ok(ApiResponse::ok(newsletter, "Newsletter regenerated successfully"))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<String>,
) -> ApiResult<ArticleDetail> {
    let summary = state
        .service
        .get_article_by_id(&article_id)
        .await
        .map_err(|e| ApiError::internal("ArticleRetrievalError", "Failed to retrieve article", &e))?
        .ok_or_else(|| {
            ApiError::not_found(
                "ArticleNotFoundError",
                "Article not found",
                json!({ "article_id": article_id }),
            )
        })?;
    Ok(ApiResponse::ok(
        ArticleDetail::from(&summary),
        "Article retrieved successfully",
    ))
}

pub async fn cache_status(State(state): State<Arc<AppState>>) -> ApiResult<CacheStatus> {
    let status = state
        .service
        .get_cache_status()
        .await
        .map_err(|e| ApiError::internal("CacheStatusError", "Failed to read cache status", &e))?;
    Ok(ApiResponse::ok(status, "Cache status retrieved successfully"))
}

pub async fn clear_cache(State(state): State<Arc<AppState>>) -> ApiResult<()> {
    state
        .service
        .clear_cache()
        .await
        .map_err(|e| ApiError::internal("CacheClearError", "Failed to clear cache", &e))?;
    Ok(ApiResponse::empty("Cache cleared successfully"))
}

pub async fn clear_cache_for_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> ApiResult<()> {
    let date = path_date(&date)?;
    state
        .service
        .clear_cache_for(date)
        .await
        .map_err(|e| ApiError::internal("CacheClearError", "Failed to clear cache", &e))?;
    Ok(ApiResponse::empty(format!("Cache cleared for {}", date)))
}

pub async fn list_archive(State(state): State<Arc<AppState>>) -> ApiResult<Vec<NaiveDate>> {
    let dates = state
        .service
        .archive_dates()
        .await
        .map_err(|e| ApiError::internal("ArchiveError", "Failed to list archive", &e))?;
    Ok(ApiResponse::ok(dates, "Archive retrieved successfully"))
}

pub async fn get_archived(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> ApiResult<Newsletter> {
    let date = path_date(&date)?;
    let newsletter = state
        .service
        .newsletter_for(date)
        .await
        .map_err(|e| ApiError::internal("ArchiveError", "Failed to read archived newsletter", &e))?
        .ok_or_else(|| {
            ApiError::not_found(
                "NewsletterNotFoundError",
                "No newsletter cached for that date",
                json!({ "date": date }),
            )
        })?;
    Ok(ApiResponse::ok(newsletter, "Archived newsletter retrieved successfully"))
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> ApiResult<Value> {
    let settings = state.settings();
    Ok(ApiResponse::ok(
        json!({
            "app_name": settings.app_name,
            "app_version": settings.app_version,
            "max_articles": settings.max_articles,
            "news_query": settings.news_query,
            "openai_model": settings.openai_model,
            "cache_backend": settings.cache_backend,
            "mode": settings.mode(),
            "has_openai_key": settings.has_openai_key(),
            "has_serpapi_key": settings.has_serpapi_key(),
            "has_newsapi_key": settings.has_newsapi_key(),
            "has_any_news_source": settings.has_any_news_source(),
        }),
        "Configuration retrieved successfully",
    ))
}
