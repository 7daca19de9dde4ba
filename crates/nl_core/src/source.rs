use async_trait::async_trait;
use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Returns the name of the news provider
    fn name(&self) -> &str;

    /// Fetches at most `count` articles matching `query`.
    ///
    /// An empty result is a normal outcome; errors are reserved for transport
    /// and decoding failures.
    async fn fetch(&self, query: &str, count: usize) -> Result<Vec<Article>>;
}
