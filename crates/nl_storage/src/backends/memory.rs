use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use nl_core::{CacheEntryInfo, Newsletter, NewsletterCache, Result};
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::warn;
use super::file::file_name_for;

struct StoredEntry {
    json: String,
    modified: DateTime<Utc>,
}

/// Process-local cache with the same contract as the file backend.
///
/// Entries are kept serialized so a round trip exercises the same encoding
/// as the on-disk store.
pub struct MemoryCache {
    entries: Mutex<BTreeMap<NaiveDate, StoredEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsletterCache for MemoryCache {
    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn get(&self, date: NaiveDate) -> Result<Option<Newsletter>> {
        let entries = self.entries.lock().await;
        let Some(entry) = entries.get(&date) else {
            return Ok(None);
        };
        match serde_json::from_str(&entry.json) {
            Ok(newsletter) => Ok(Some(newsletter)),
            Err(e) => {
                warn!("Error reading cached newsletter for {}: {}", date, e);
                Ok(None)
            }
        }
    }

    async fn put(&self, date: NaiveDate, newsletter: &Newsletter) -> Result<()> {
        let json = serde_json::to_string_pretty(newsletter)?;
        let mut entries = self.entries.lock().await;
        entries.insert(
            date,
            StoredEntry {
                json,
                modified: Utc::now(),
            },
        );
        Ok(())
    }

    async fn exists(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.entries.lock().await.contains_key(&date))
    }

    async fn clear(&self) -> Result<()> {
        self.entries.lock().await.clear();
        Ok(())
    }

    async fn clear_date(&self, date: NaiveDate) -> Result<()> {
        self.entries.lock().await.remove(&date);
        Ok(())
    }

    async fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        Ok(self.entries.lock().await.keys().rev().copied().collect())
    }

    async fn entries(&self) -> Result<Vec<CacheEntryInfo>> {
        let entries = self.entries.lock().await;
        Ok(entries
            .iter()
            .rev()
            .map(|(date, entry)| CacheEntryInfo {
                date: *date,
                file_name: file_name_for(*date),
                size_bytes: entry.json.len() as u64,
                modified: Some(entry.modified),
            })
            .collect())
    }
}
