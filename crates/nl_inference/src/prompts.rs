use nl_core::{Article, Summary};

/// How many summaries the editorial prompt draws on.
pub const EDITORIAL_CONTEXT_LIMIT: usize = 5;

pub fn summary_prompt(article: &Article) -> String {
    format!(
        "You are an experienced tech journalist who makes complex AI topics accessible to general audiences.\n\
         \n\
         Summarize this AI news article in 2-3 sentences:\n\
         \n\
         Title: {title}\n\
         Source: {source}\n\
         Content: {snippet}\n\
         \n\
         Create:\n\
         1. A catchy, engaging title (different from original)\n\
         2. A clear 2-3 sentence summary\n\
         3. 3-5 key points\n\
         4. A relevance score (0.0-1.0) for AI/tech audience\n\
         \n\
         Format your response as:\n\
         TITLE: [catchy title]\n\
         SUMMARY: [2-3 sentence summary]\n\
         KEY_POINTS: [bullet point 1, bullet point 2, bullet point 3]\n\
         RELEVANCE: [score between 0.0 and 1.0]",
        title = article.title,
        source = article.source,
        snippet = article.snippet,
    )
}

pub fn editorial_prompt(summaries: &[Summary]) -> String {
    let context = summaries
        .iter()
        .take(EDITORIAL_CONTEXT_LIMIT)
        .map(|s| format!("- {}: {}", s.catchy_title, s.summary))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a senior tech editor with deep expertise in AI trends.\n\
         \n\
         Write a compelling 200-300 word editorial article that introduces an AI newsletter \
         and weaves together themes from these news stories:\n\
         \n\
         {context}\n\
         \n\
         Requirements:\n\
         1. Engaging title that captures current AI trends\n\
         2. 200-300 words of compelling narrative\n\
         3. Connect the stories to broader AI themes\n\
         4. Professional but accessible tone\n\
         5. End with forward-looking perspective\n\
         \n\
         Format your response as:\n\
         TITLE: [editorial title]\n\
         CONTENT: [200-300 word editorial content on a single line]\n\
         THEME: [main theme/topic]\n\
         AUTHOR: [editorial author name]",
        context = context,
    )
}
