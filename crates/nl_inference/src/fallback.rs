use chrono::Utc;
use nl_core::{summary_id, Article, Editorial, Summary};
use rand::seq::SliceRandom;
use rand::Rng;

pub const EDITOR_BYLINE: &str = "Senior Editor";
pub const PLACEHOLDER_THEME: &str = "AI Innovation and Future Trends";

const TITLE_PREFIXES: [&str; 5] = ["Breaking: ", "🚀 ", "Revolutionary: ", "Game-Changer: ", "Next-Gen: "];
const SUMMARY_SUFFIX: &str = " This development represents a significant step forward in AI technology.";
const KEY_POINTS: [&str; 3] = [
    "Significant advancement in AI capabilities",
    "Potential impact on various industries",
    "Continued innovation in the field",
];

const EDITORIAL_TITLE: &str = "The AI Revolution: Where We Stand Today";
const EDITORIAL_BODY: &str = "The artificial intelligence landscape continues to evolve at an unprecedented pace, with each passing day bringing new breakthroughs that reshape our understanding of what's possible. From language models that can engage in sophisticated reasoning to autonomous systems that navigate complex environments, we're witnessing a technological renaissance that promises to transform every aspect of human life.

Today's headlines reflect this rapid advancement, showcasing innovations that span from fundamental research to practical applications. These developments aren't just technical achievements; they represent humanity's collective effort to push the boundaries of intelligence itself. As we stand at this inflection point, it's clear that the future belongs to those who can harness the power of AI responsibly and creatively.

The journey ahead promises even greater discoveries, but it also demands thoughtful consideration of the ethical implications and societal impacts of these powerful technologies.";

pub fn placeholder_summary(article: &Article) -> Summary {
    placeholder_summary_with(article, &mut rand::thread_rng())
}

/// Only the title prefix and the relevance score depend on `rng`.
pub fn placeholder_summary_with<R: Rng>(article: &Article, rng: &mut R) -> Summary {
    let prefix = TITLE_PREFIXES.choose(rng).copied().unwrap_or(TITLE_PREFIXES[0]);
    Summary {
        id: summary_id(&article.title, &article.url),
        original_article: article.clone(),
        catchy_title: format!("{}{}", prefix, article.title),
        summary: format!("{}{}", article.snippet, SUMMARY_SUFFIX),
        key_points: KEY_POINTS.iter().map(|p| p.to_string()).collect(),
        relevance_score: rng.gen_range(0.7..=0.95),
    }
}

pub fn placeholder_editorial() -> Editorial {
    Editorial {
        title: EDITORIAL_TITLE.to_string(),
        content: EDITORIAL_BODY.to_string(),
        theme: PLACEHOLDER_THEME.to_string(),
        author: EDITOR_BYLINE.to_string(),
        created_at: Utc::now(),
    }
}
