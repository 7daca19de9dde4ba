pub mod manager;
pub mod placeholder;
pub mod sources;

pub use manager::SourceManager;
pub use sources::{build_client, get_sources, NewsApiSource, SerpApiSource};

pub mod prelude {
    pub use super::manager::SourceManager;
    pub use nl_core::{Article, ArticleSource, Error, Result};
}
