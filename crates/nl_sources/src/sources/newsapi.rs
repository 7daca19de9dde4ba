use async_trait::async_trait;
use nl_core::{Article, ArticleSource, Error, Result};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info};
use url::Url;
use super::utils::{non_empty, parse_published};

const BASE_URL: &str = "https://newsapi.org/v2/everything";
const REMOVED_MARKER: &str = "[Removed]";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EverythingResponse {
    status: String,
    message: Option<String>,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiArticle {
    source: Option<NewsApiSourceRef>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    url_to_image: Option<String>,
    published_at: Option<String>,
    content: Option<String>,
}

#[derive(Deserialize)]
struct NewsApiSourceRef {
    name: Option<String>,
}

pub struct NewsApiSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiSource {
    pub fn new(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn search_url(&self, query: &str, count: usize) -> Result<Url> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("q", query),
                ("pageSize", &count.to_string()),
                ("apiKey", &self.api_key),
                ("language", "en"),
                ("sortBy", "publishedAt"),
            ],
        )
        .map_err(|e| Error::Source(format!("Invalid NewsAPI URL: {}", e)))
    }
}

impl fmt::Debug for NewsApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSource")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn into_articles(response: EverythingResponse) -> Result<Vec<Article>> {
    if response.status != "ok" {
        return Err(Error::Source(format!(
            "NewsAPI returned status '{}': {}",
            response.status,
            response.message.unwrap_or_default()
        )));
    }

    debug!("NewsAPI returned {} articles", response.articles.len());
    Ok(response
        .articles
        .into_iter()
        .filter_map(|item| {
            let url = non_empty(item.url)?;
            let title = non_empty(item.title).filter(|t| t != REMOVED_MARKER)?;
            let snippet = non_empty(item.description)?;
            Some(Article {
                title,
                url,
                snippet,
                thumbnail: non_empty(item.url_to_image),
                source: non_empty(item.source.and_then(|s| s.name))
                    .unwrap_or_else(|| "NewsAPI".to_string()),
                published_at: item.published_at.as_deref().and_then(parse_published),
                full_text: non_empty(item.content),
            })
        })
        .collect())
}

#[async_trait]
impl ArticleSource for NewsApiSource {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch(&self, query: &str, count: usize) -> Result<Vec<Article>> {
        let url = self.search_url(query, count)?;
        // NewsAPI reports failures in the body, so the status check comes after decoding.
        let response = self
            .client
            .get(url)
            .send()
            .await?
            .json::<EverythingResponse>()
            .await?;

        let articles = into_articles(response)?;
        info!("Parsed {} valid articles from NewsAPI", articles.len());
        Ok(articles)
    }
}
