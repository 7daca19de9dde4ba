use async_trait::async_trait;
use nl_core::{Article, ArticleSource, Error, Result};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info};
use url::Url;
use super::utils::{non_empty, parse_published};

const BASE_URL: &str = "https://serpapi.com/search.json";

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    news_results: Vec<NewsResult>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct NewsResult {
    link: Option<String>,
    title: Option<String>,
    snippet: Option<String>,
    thumbnail: Option<String>,
    source: Option<ResultSource>,
    date: Option<String>,
}

/// Older responses carry the source as a plain string, newer ones as an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResultSource {
    Name(String),
    Detailed { name: Option<String> },
}

impl ResultSource {
    fn into_name(self) -> Option<String> {
        match self {
            ResultSource::Name(name) => Some(name),
            ResultSource::Detailed { name } => name,
        }
    }
}

/// Google News results through SerpAPI.
pub struct SerpApiSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerpApiSource {
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
                ("engine", "google"),
                ("q", query),
                ("tbm", "nws"),
                ("num", &count.to_string()),
                ("api_key", &self.api_key),
            ],
        )
        .map_err(|e| Error::Source(format!("Invalid SerpAPI URL: {}", e)))
    }
}

impl fmt::Debug for SerpApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpApiSource")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn into_articles(response: SearchResponse) -> Result<Vec<Article>> {
    if let Some(error) = response.error {
        return Err(Error::Source(format!("SerpAPI error: {}", error)));
    }

    debug!("SerpAPI returned {} news results", response.news_results.len());
    Ok(response
        .news_results
        .into_iter()
        .filter_map(|item| {
            let url = non_empty(item.link)?;
            let title = non_empty(item.title)?;
            let snippet = non_empty(item.snippet)?;
            Some(Article {
                title,
                url,
                snippet,
                thumbnail: non_empty(item.thumbnail),
                source: non_empty(item.source.and_then(ResultSource::into_name))
                    .unwrap_or_else(|| "Google News".to_string()),
                published_at: item.date.as_deref().and_then(parse_published),
                full_text: None,
            })
        })
        .collect())
}

#[async_trait]
impl ArticleSource for SerpApiSource {
    fn name(&self) -> &str {
        "SerpAPI"
    }

    async fn fetch(&self, query: &str, count: usize) -> Result<Vec<Article>> {
        let url = self.search_url(query, count)?;
        let response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;

        let articles = into_articles(response)?;
        info!("Parsed {} valid articles from SerpAPI", articles.len());
        Ok(articles)
    }
}
