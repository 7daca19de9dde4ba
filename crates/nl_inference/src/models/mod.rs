use std::sync::Arc;
use std::time::Duration;
use nl_core::{InferenceModel, Result, Settings};
use reqwest::Client;
use tracing::{info, warn};

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;

/// Builds the configured language model, or `None` when no usable key is set.
pub fn create_model(settings: &Settings) -> Result<Option<Arc<dyn InferenceModel>>> {
    let Some(key) = settings.openai_key() else {
        warn!("No OpenAI API key configured, content will use placeholder text");
        return Ok(None);
    };

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()?;
    let model = OpenAiModel::new(
        client,
        key.to_string(),
        settings.openai_base_url.clone(),
        settings.openai_model.clone(),
    );
    info!("🤖 Using {} via {}", model.model(), settings.openai_base_url);
    Ok(Some(Arc::new(model)))
}
