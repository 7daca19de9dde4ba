use async_trait::async_trait;
use crate::Result;

/// A language model backend that turns a prompt into free-form text.
#[async_trait]
pub trait InferenceModel: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    /// Send a single prompt and return the raw completion text
    async fn complete(&self, prompt: &str) -> Result<String>;
}
