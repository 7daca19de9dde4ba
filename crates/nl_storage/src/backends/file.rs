use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use nl_core::{CacheEntryInfo, Newsletter, NewsletterCache, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

const FILE_PREFIX: &str = "newsletter_";
const FILE_SUFFIX: &str = ".json";

/// Older API dumps stored the whole response envelope; accept both shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPayload {
    Wrapped { newsletter: Newsletter },
    Bare(Newsletter),
}

impl StoredPayload {
    fn into_newsletter(self) -> Newsletter {
        match self {
            StoredPayload::Wrapped { newsletter } => newsletter,
            StoredPayload::Bare(newsletter) => newsletter,
        }
    }
}

pub fn file_name_for(date: NaiveDate) -> String {
    format!("{}{}{}", FILE_PREFIX, date.format("%Y-%m-%d"), FILE_SUFFIX)
}

fn date_from_file_name(name: &str) -> Option<NaiveDate> {
    let date = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

async fn write_then_rename(tmp_path: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    fs::write(tmp_path, data).await?;
    fs::rename(tmp_path, path).await
}

struct CachedFile {
    date: NaiveDate,
    path: PathBuf,
    file_name: String,
}

/// Directory of `newsletter_YYYY-MM-DD.json` files, one per date.
///
/// All access goes through `lock`; the guard is dropped on every return path,
/// including `?` early exits.
pub struct FileCache {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl FileCache {
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).await.map_err(|e| {
            nl_core::Error::Storage(format!(
                "Failed to create cache directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        debug!("File cache ready at {}", dir.display());
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(file_name_for(date))
    }

    /// Must be called with `lock` held.
    async fn scan(&self) -> Result<Vec<CachedFile>> {
        let mut files = Vec::new();
        let mut dir = match fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(files),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if let Some(date) = date_from_file_name(&file_name) {
                files.push(CachedFile {
                    date,
                    path: entry.path(),
                    file_name,
                });
            }
        }

        files.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(files)
    }
}

#[async_trait]
impl NewsletterCache for FileCache {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    async fn get(&self, date: NaiveDate) -> Result<Option<Newsletter>> {
        let _guard = self.lock.lock().await;
        let path = self.path_for(date);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<StoredPayload>(&bytes) {
            Ok(payload) => Ok(Some(payload.into_newsletter())),
            Err(e) => {
                warn!("Error reading cache file {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    async fn put(&self, date: NaiveDate, newsletter: &Newsletter) -> Result<()> {
        let _guard = self.lock.lock().await;
        let path = self.path_for(date);
        let tmp_path = self.dir.join(format!(".{}.tmp", file_name_for(date)));

        let data = serde_json::to_vec_pretty(newsletter)?;
        if let Err(e) = write_then_rename(&tmp_path, &path, &data).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(nl_core::Error::Storage(format!(
                "Failed to write cache file {}: {}",
                path.display(),
                e
            )));
        }

        info!("💾 Newsletter cached to {}", path.display());
        Ok(())
    }

    async fn exists(&self, date: NaiveDate) -> Result<bool> {
        let _guard = self.lock.lock().await;
        Ok(fs::try_exists(self.path_for(date)).await?)
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        for file in self.scan().await? {
            match fs::remove_file(&file.path).await {
                Ok(()) => debug!("Deleted cache file: {}", file.path.display()),
                Err(e) => warn!("Error deleting cache file {}: {}", file.path.display(), e),
            }
        }
        Ok(())
    }

    async fn clear_date(&self, date: NaiveDate) -> Result<()> {
        let _guard = self.lock.lock().await;
        let path = self.path_for(date);
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Deleted cache file: {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        let _guard = self.lock.lock().await;
        Ok(self.scan().await?.into_iter().map(|f| f.date).collect())
    }

    async fn entries(&self) -> Result<Vec<CacheEntryInfo>> {
        let _guard = self.lock.lock().await;
        let mut entries = Vec::new();
        for file in self.scan().await? {
            let metadata = fs::metadata(&file.path).await?;
            entries.push(CacheEntryInfo {
                date: file.date,
                file_name: file.file_name,
                size_bytes: metadata.len(),
                modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            });
        }
        Ok(entries)
    }
}
