use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_NEWS_QUERY: &str = "AI artificial intelligence machine learning tech news";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

const OPENAI_KEY_TEMPLATE: &str = "your_openai_api_key_here";
const SERPAPI_KEY_TEMPLATE: &str = "your_serpapi_key_here";
const NEWSAPI_KEY_TEMPLATE: &str = "your_newsapi_key_here";

/// Runtime settings shared by every component.
#[derive(Clone)]
pub struct Settings {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub serpapi_api_key: Option<String>,
    pub newsapi_api_key: Option<String>,
    pub app_name: String,
    pub app_version: String,
    pub log_level: String,
    pub max_articles: usize,
    pub news_query: String,
    pub cache_dir: PathBuf,
    pub cache_backend: String,
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            serpapi_api_key: None,
            newsapi_api_key: None,
            app_name: "AI News Newsletter".to_string(),
            app_version: "1.0.0".to_string(),
            log_level: "INFO".to_string(),
            max_articles: 10,
            news_query: DEFAULT_NEWS_QUERY.to_string(),
            cache_dir: PathBuf::from("cache"),
            cache_backend: "file".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        }
    }
}

fn usable_key<'a>(key: &'a Option<String>, template: &str) -> Option<&'a str> {
    key.as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty() && *k != template)
}

impl Settings {
    pub fn openai_key(&self) -> Option<&str> {
        usable_key(&self.openai_api_key, OPENAI_KEY_TEMPLATE)
    }

    pub fn serpapi_key(&self) -> Option<&str> {
        usable_key(&self.serpapi_api_key, SERPAPI_KEY_TEMPLATE)
    }

    pub fn newsapi_key(&self) -> Option<&str> {
        usable_key(&self.newsapi_api_key, NEWSAPI_KEY_TEMPLATE)
    }

    pub fn has_openai_key(&self) -> bool {
        self.openai_key().is_some()
    }

    pub fn has_serpapi_key(&self) -> bool {
        self.serpapi_key().is_some()
    }

    pub fn has_newsapi_key(&self) -> bool {
        self.newsapi_key().is_some()
    }

    pub fn has_any_news_source(&self) -> bool {
        self.has_serpapi_key() || self.has_newsapi_key()
    }

    /// Demo mode: either the model or every news provider is missing.
    pub fn is_demo_mode(&self) -> bool {
        !(self.has_openai_key() && self.has_any_news_source())
    }

    pub fn mode(&self) -> &'static str {
        if self.is_demo_mode() {
            "demo"
        } else {
            "production"
        }
    }
}

fn redact(key: &Option<String>) -> &'static str {
    match key {
        Some(_) => "<redacted>",
        None => "None",
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("serpapi_api_key", &redact(&self.serpapi_api_key))
            .field("newsapi_api_key", &redact(&self.newsapi_api_key))
            .field("app_name", &self.app_name)
            .field("app_version", &self.app_version)
            .field("log_level", &self.log_level)
            .field("max_articles", &self.max_articles)
            .field("news_query", &self.news_query)
            .field("cache_dir", &self.cache_dir)
            .field("cache_backend", &self.cache_backend)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_demo_mode() {
        let settings = Settings::default();
        assert!(!settings.has_openai_key());
        assert!(!settings.has_any_news_source());
        assert!(settings.is_demo_mode());
        assert_eq!(settings.mode(), "demo");
    }

    #[test]
    fn test_template_keys_are_ignored() {
        let settings = Settings {
            openai_api_key: Some("your_openai_api_key_here".to_string()),
            serpapi_api_key: Some("your_serpapi_key_here".to_string()),
            newsapi_api_key: Some("  ".to_string()),
            ..Settings::default()
        };
        assert!(!settings.has_openai_key());
        assert!(!settings.has_serpapi_key());
        assert!(!settings.has_newsapi_key());
    }

    #[test]
    fn test_production_mode_needs_model_and_source() {
        let settings = Settings {
            openai_api_key: Some("sk-test".to_string()),
            newsapi_api_key: Some("news-key".to_string()),
            ..Settings::default()
        };
        assert!(!settings.is_demo_mode());
        assert_eq!(settings.mode(), "production");

        let model_only = Settings {
            openai_api_key: Some("sk-test".to_string()),
            ..Settings::default()
        };
        assert!(model_only.is_demo_mode());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let settings = Settings {
            openai_api_key: Some("sk-secret".to_string()),
            ..Settings::default()
        };
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
