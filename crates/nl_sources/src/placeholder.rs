use nl_core::Article;

struct PlaceholderRecord {
    title: &'static str,
    url: &'static str,
    snippet: &'static str,
    full_text: &'static str,
    thumbnail: &'static str,
    source: &'static str,
}

const RECORDS: &[PlaceholderRecord] = &[
    PlaceholderRecord {
        title: "GPT-5 Unveiled: OpenAI's Next-Gen AI Promises Unprecedented Capabilities",
        url: "https://openai.com/blog/gpt-5-announcement",
        snippet: "OpenAI officially announced GPT-5, highlighting its advanced reasoning, multimodal understanding, and improved efficiency. Experts predict a new era for AI applications.",
        full_text: "The highly anticipated GPT-5 model from OpenAI is set to redefine artificial intelligence. With significant advancements in natural language processing, computer vision, and complex problem-solving, GPT-5 is expected to power a new generation of AI tools and services. Early benchmarks suggest a leap in performance over its predecessors, particularly in areas requiring deep contextual understanding and creative generation.",
        thumbnail: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=400&h=250&fit=crop&crop=center",
        source: "OpenAI Blog",
    },
    PlaceholderRecord {
        title: "Google DeepMind Achieves Breakthrough in AI for Scientific Discovery",
        url: "https://blog.google/technology/ai/deepmind-scientific-discovery",
        snippet: "DeepMind's latest AI model demonstrates remarkable ability to accelerate scientific research, predicting complex molecular structures and optimizing experimental designs.",
        full_text: "Researchers at Google DeepMind have published results on an AI system designed to aid scientific discovery. Trained on scientific literature and experimental data, it can hypothesize new materials, predict protein folding and suggest novel chemical synthesis pathways, cutting the time and cost of fundamental research.",
        thumbnail: "https://images.unsplash.com/photo-1696258685100-26b1d0437b0c?w=400&h=250&fit=crop&crop=center",
        source: "Google AI Blog",
    },
    PlaceholderRecord {
        title: "AI Ethics in Focus: New Regulations Proposed for Responsible AI Development",
        url: "https://www.techpolicy.gov/ai-ethics-regulations",
        snippet: "Governments worldwide are collaborating on new ethical guidelines and regulations to ensure AI development remains human-centric and prevents misuse.",
        full_text: "A consortium of international bodies and governments has proposed a framework for AI regulation focused on transparency, accountability, fairness and privacy. The proposal aims to balance innovation with the protection of societal values, and public consultations are underway.",
        thumbnail: "https://images.unsplash.com/photo-1696258685077-07904173c801?w=400&h=250&fit=crop&crop=center",
        source: "TechPolicy.gov",
    },
    PlaceholderRecord {
        title: "The Rise of AI Companions: More Than Just Chatbots",
        url: "https://www.futuretech.com/ai-companions-evolution",
        snippet: "AI companions are evolving beyond simple chatbots, offering personalized assistance, emotional support, and even creative collaboration.",
        full_text: "The next frontier in personal AI is the sophisticated AI companion. Equipped with emotional intelligence and learning capabilities, these systems provide proactive assistance, hold meaningful conversations and adapt to individual preferences.",
        thumbnail: "https://images.unsplash.com/photo-1696258685090-d03775862167?w=400&h=250&fit=crop&crop=center",
        source: "Future Tech Magazine",
    },
    PlaceholderRecord {
        title: "AI in Healthcare: Revolutionizing Diagnostics and Drug Discovery",
        url: "https://www.medtechdaily.com/ai-healthcare-revolution",
        snippet: "AI-powered tools are transforming healthcare, enabling earlier disease detection, more accurate diagnoses, and accelerating the development of new therapies.",
        full_text: "From analyzing medical images to sifting through genomic data for drug targets, AI is enhancing patient care and biomedical research. Startups and pharmaceutical companies use it to streamline clinical trials, personalize treatment plans and discover novel compounds.",
        thumbnail: "https://images.unsplash.com/photo-1696258685082-d03775862167?w=400&h=250&fit=crop&crop=center",
        source: "MedTech Daily",
    },
    PlaceholderRecord {
        title: "Quantum Computing Meets AI: A New Frontier for Complex Problem Solving",
        url: "https://www.quantumaijournal.com/hybrid-systems",
        snippet: "The convergence of quantum computing and AI is paving the way for hybrid systems capable of tackling problems currently beyond classical computation.",
        full_text: "Researchers are developing quantum AI algorithms that exploit quantum mechanics to process information in ways classical computers cannot, with expected breakthroughs in cryptography, materials science and drug development.",
        thumbnail: "https://images.unsplash.com/photo-1696258685072-d03775862167?w=400&h=250&fit=crop&crop=center",
        source: "Quantum AI Journal",
    },
    PlaceholderRecord {
        title: "AI in Education: Personalized Learning and Administrative Efficiency",
        url: "https://www.edutechinsights.com/ai-in-education",
        snippet: "AI is being integrated into educational systems to offer personalized learning experiences, automate administrative tasks, and provide intelligent tutoring.",
        full_text: "AI-powered platforms adapt curricula to individual students, give instant feedback and flag where learners struggle. Outside the classroom they automate grading, scheduling and resource allocation so educators can focus on teaching.",
        thumbnail: "https://images.unsplash.com/photo-1696258685067-d03775862167?w=400&h=250&fit=crop&crop=center",
        source: "EduTech Insights",
    },
    PlaceholderRecord {
        title: "The Future of Work: How AI is Reshaping Industries and Job Markets",
        url: "https://www.globalworkforce.org/ai-future-of-work",
        snippet: "AI is fundamentally altering the landscape of work, creating new job roles while automating others, necessitating a focus on reskilling and adaptation.",
        full_text: "While routine tasks are being automated, new roles requiring AI skills, creativity and critical thinking are emerging. Governments and corporations are investing in reskilling for a collaborative human-AI workplace.",
        thumbnail: "https://images.unsplash.com/photo-1696258685057-d03775862167?w=400&h=250&fit=crop&crop=center",
        source: "Global Workforce Org",
    },
    PlaceholderRecord {
        title: "AI in Creative Arts: Generating Music, Art, and Literature",
        url: "https://www.creativeai.art/generative-models",
        snippet: "Generative AI models are pushing the boundaries of creativity, producing original music compositions, visual art, and even compelling literary works.",
        full_text: "AI algorithms compose symphonies, paint digital works and write poetry and prose, raising questions about authorship and originality. Artists increasingly collaborate with AI as a muse and a tool.",
        thumbnail: "https://images.unsplash.com/photo-1696258685047-d03775862167?w=400&h=250&fit=crop&crop=center",
        source: "Creative AI Hub",
    },
    PlaceholderRecord {
        title: "Edge AI: Bringing Intelligence Closer to the Source",
        url: "https://www.edgecomputingtimes.com/ai-on-device",
        snippet: "The trend of deploying AI models directly on devices (edge AI) is enhancing privacy, reducing latency, and enabling new applications in IoT and robotics.",
        full_text: "Running AI directly on local devices improves data privacy, lowers latency and reduces bandwidth needs. It matters most for autonomous vehicles, smart home devices and industrial IoT, and specialized AI chips are accelerating the shift.",
        thumbnail: "https://images.unsplash.com/photo-1696258685037-d03775862167?w=400&h=250&fit=crop&crop=center",
        source: "Edge Computing Times",
    },
];

/// The built-in pool of placeholder articles.
pub fn default_pool() -> Vec<Article> {
    RECORDS
        .iter()
        .map(|r| Article {
            title: r.title.to_string(),
            url: r.url.to_string(),
            snippet: r.snippet.to_string(),
            thumbnail: Some(r.thumbnail.to_string()),
            source: r.source.to_string(),
            published_at: None,
            full_text: Some(r.full_text.to_string()),
        })
        .collect()
}

/// Take `count` articles from `pool`, wrapping around when it runs out.
pub fn cycle(pool: &[Article], count: usize) -> Vec<Article> {
    pool.iter().cycle().take(count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_is_complete() {
        let pool = default_pool();
        assert_eq!(pool.len(), 10);
        for article in &pool {
            assert!(!article.title.is_empty());
            assert!(article.url.starts_with("https://"));
            assert!(!article.source.is_empty());
            assert!(!article.snippet.is_empty());
        }
    }

    #[test]
    fn test_cycle_wraps_around() {
        let pool = default_pool();
        for count in [0, 1, 7, 10, 11, 25] {
            let articles = cycle(&pool, count);
            assert_eq!(articles.len(), count);
            for (i, article) in articles.iter().enumerate() {
                assert_eq!(article, &pool[i % pool.len()]);
            }
        }
    }

    #[test]
    fn test_cycle_empty_pool() {
        assert!(cycle(&[], 5).is_empty());
    }
}
