use std::path::Path;
use std::sync::Arc;
use nl_core::{NewsletterCache, Result};

pub mod backends;

pub use backends::*;

/// Build the cache backend named by `kind` (`file` or `memory`).
pub async fn create_cache(kind: &str, dir: &Path) -> Result<Arc<dyn NewsletterCache>> {
    match kind.to_lowercase().as_str() {
        "file" => Ok(Arc::new(FileCache::new(dir).await?)),
        "memory" => Ok(Arc::new(MemoryCache::new())),
        other => Err(nl_core::Error::Storage(format!(
            "Unknown cache backend: {}. Available backends: file, memory",
            other
        ))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_cache;
    pub use nl_core::NewsletterCache;
}
