use std::sync::Arc;
use chrono::Utc;
use nl_core::{summary_id, Article, Editorial, InferenceModel, Summary};
use tracing::{debug, error, info};
use crate::fallback::{placeholder_editorial, placeholder_summary, EDITOR_BYLINE};
use crate::parser::{parse_editorial, parse_summary};
use crate::prompts::{editorial_prompt, summary_prompt};

/// Turns articles into summaries and summaries into an editorial.
///
/// Without a model, or when the model call fails, the placeholder generator
/// is used instead. Neither operation can fail.
#[derive(Debug, Clone)]
pub struct ContentEngine {
    model: Option<Arc<dyn InferenceModel>>,
}

impl ContentEngine {
    pub fn new(model: Option<Arc<dyn InferenceModel>>) -> Self {
        if model.is_none() {
            info!("Content engine running without a model, using placeholder content");
        }
        Self { model }
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref().map(|m| m.name())
    }

    pub async fn summarize(&self, article: &Article) -> Summary {
        let Some(model) = &self.model else {
            return placeholder_summary(article);
        };

        match model.complete(&summary_prompt(article)).await {
            Ok(reply) => {
                debug!("Summary reply for '{}': {}", article.title, reply);
                let fields = parse_summary(&reply, article);
                Summary {
                    id: summary_id(&article.title, &article.url),
                    original_article: article.clone(),
                    catchy_title: fields.title.into_inner(),
                    summary: fields.summary.into_inner(),
                    key_points: fields.key_points.into_inner(),
                    relevance_score: fields.relevance.into_inner(),
                }
            }
            Err(e) => {
                error!("AI summarization failed for '{}': {}", article.title, e);
                placeholder_summary(article)
            }
        }
    }

    pub async fn edit(&self, summaries: &[Summary]) -> Editorial {
        let Some(model) = &self.model else {
            return placeholder_editorial();
        };

        match model.complete(&editorial_prompt(summaries)).await {
            Ok(reply) => {
                debug!("Editorial reply: {}", reply);
                let fields = parse_editorial(&reply);
                Editorial {
                    title: fields.title.into_inner(),
                    content: fields.content.into_inner(),
                    theme: fields.theme.into_inner(),
                    author: EDITOR_BYLINE.to_string(),
                    created_at: Utc::now(),
                }
            }
            Err(e) => {
                error!("AI editorial generation failed: {}", e);
                placeholder_editorial()
            }
        }
    }
}
