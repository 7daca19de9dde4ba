use async_trait::async_trait;
use chrono::NaiveDate;
use crate::types::{CacheEntryInfo, Newsletter};
use crate::Result;

/// One newsletter per calendar date.
///
/// Implementations serialize every operation through a single exclusive
/// section so readers never see a write in progress.
#[async_trait]
pub trait NewsletterCache: Send + Sync {
    /// Human readable location of the store (directory, "memory", ...)
    fn location(&self) -> String;

    /// Load the entry for `date`. Malformed entries are reported as absent.
    async fn get(&self, date: NaiveDate) -> Result<Option<Newsletter>>;

    /// Replace the entry for `date`
    async fn put(&self, date: NaiveDate, newsletter: &Newsletter) -> Result<()>;

    async fn exists(&self, date: NaiveDate) -> Result<bool>;

    /// Remove every entry
    async fn clear(&self) -> Result<()>;

    /// Remove the entry for `date`, if any
    async fn clear_date(&self, date: NaiveDate) -> Result<()>;

    /// Dates with an entry, newest first
    async fn list_dates(&self) -> Result<Vec<NaiveDate>>;

    /// Per-entry size and modification details, newest first
    async fn entries(&self) -> Result<Vec<CacheEntryInfo>>;
}
