pub mod config;
pub mod error;
pub mod models;
pub mod source;
pub mod storage;
pub mod types;

pub use config::Settings;
pub use error::Error;
pub use models::InferenceModel;
pub use source::ArticleSource;
pub use storage::NewsletterCache;
pub use types::{
    parse_date, summary_id, today, Article, ArticleDetail, CacheEntryInfo, CacheStatus, Editorial,
    Newsletter, Summary, NEWSLETTER_VERSION,
};

pub type Result<T> = std::result::Result<T, Error>;
