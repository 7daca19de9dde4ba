//! Parsing of the `LABEL: value` replies the prompts ask for.
//!
//! Every extracted field records whether it came from the model or from a
//! default, so a partially formatted reply still yields a complete value.

use std::collections::HashMap;
use nl_core::Article;

pub const DEFAULT_RELEVANCE: f64 = 0.8;
pub const DEFAULT_EDITORIAL_TITLE: &str = "The AI Revolution: Where We Stand Today";
pub const DEFAULT_EDITORIAL_CONTENT: &str = "AI continues to reshape our world...";
pub const DEFAULT_EDITORIAL_THEME: &str = "AI Innovation";

#[derive(Debug, Clone, PartialEq)]
pub enum Extracted<T> {
    Parsed(T),
    Defaulted(T),
}

impl<T> Extracted<T> {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Extracted::Parsed(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Extracted::Parsed(v) | Extracted::Defaulted(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Extracted::Parsed(v) | Extracted::Defaulted(v) => v,
        }
    }

    fn or_default_with(parsed: Option<T>, default: impl FnOnce() -> T) -> Self {
        match parsed {
            Some(v) => Extracted::Parsed(v),
            None => Extracted::Defaulted(default()),
        }
    }
}

/// Labeled lines of a model reply, keyed by upper-case label.
#[derive(Debug, Default)]
pub struct LabeledText {
    fields: HashMap<String, String>,
}

impl LabeledText {
    pub fn parse(text: &str) -> Self {
        let mut fields = HashMap::new();
        for line in text.lines() {
            let line = line.trim_start();
            let Some((label, value)) = line.split_once(':') else {
                continue;
            };
            if label.is_empty() || !label.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
                continue;
            }
            // later lines overwrite earlier ones
            fields.insert(label.to_string(), value.trim().to_string());
        }
        Self { fields }
    }

    /// Non-empty value for `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .get(label)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryFields {
    pub title: Extracted<String>,
    pub summary: Extracted<String>,
    pub key_points: Extracted<Vec<String>>,
    pub relevance: Extracted<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorialFields {
    pub title: Extracted<String>,
    pub content: Extracted<String>,
    pub theme: Extracted<String>,
}

pub fn default_key_points(article: &Article) -> Vec<String> {
    let short_title: String = article.title.chars().take(80).collect();
    vec![
        format!("Key development in {}", article.source),
        format!("Related to: {}", short_title),
        "Significant impact on AI industry".to_string(),
    ]
}

fn split_key_points(value: &str) -> Vec<String> {
    value
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|p| p.trim().trim_start_matches(['-', '*', '•']).trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_relevance(value: &str) -> Option<f64> {
    value
        .trim_matches(|c| c == '[' || c == ']')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 1.0))
}

pub fn parse_summary(text: &str, article: &Article) -> SummaryFields {
    let labeled = LabeledText::parse(text);

    SummaryFields {
        title: Extracted::or_default_with(labeled.get("TITLE").map(str::to_string), || {
            article.title.clone()
        }),
        summary: Extracted::or_default_with(labeled.get("SUMMARY").map(str::to_string), || {
            article.snippet.clone()
        }),
        key_points: Extracted::or_default_with(
            labeled
                .get("KEY_POINTS")
                .map(split_key_points)
                .filter(|points| !points.is_empty()),
            || default_key_points(article),
        ),
        relevance: Extracted::or_default_with(
            labeled.get("RELEVANCE").and_then(parse_relevance),
            || DEFAULT_RELEVANCE,
        ),
    }
}

/// Any `AUTHOR:` line is ignored; the byline is fixed by the caller.
pub fn parse_editorial(text: &str) -> EditorialFields {
    let labeled = LabeledText::parse(text);
    let field = |label: &str, default: &str| {
        Extracted::or_default_with(labeled.get(label).map(str::to_string), || default.to_string())
    };

    EditorialFields {
        title: field("TITLE", DEFAULT_EDITORIAL_TITLE),
        content: field("CONTENT", DEFAULT_EDITORIAL_CONTENT),
        theme: field("THEME", DEFAULT_EDITORIAL_THEME),
    }
}
