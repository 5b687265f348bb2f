use crate::errors::CodemeldError;
use chrono::{DateTime, Local};
use rand::rngs::OsRng;
use rand::RngCore;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs as async_fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, trace, warn};

pub const MAX_CACHE_FILES: usize = 50;
const CACHE_DIR_NAME: &str = "codemeld";
const CACHE_FILE_EXT: &str = "md";

/// Source of the short token that makes each cache file name unique.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Eight hex characters from the OS random source, or timestamp digits if
/// that source is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; 4];
        match OsRng.try_fill_bytes(&mut bytes) {
            Ok(()) => bytes.iter().map(|b| format!("{:02x}", b)).collect(),
            Err(e) => {
                warn!("Random source unavailable, using timestamp id: {}", e);
                timestamp_id()
            }
        }
    }
}

fn timestamp_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{:08}", nanos).chars().take(8).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub id: String,
    pub created_at: DateTime<Local>,
    pub path: PathBuf,
    pub size: usize,
}

/// `~/.cache/codemeld`
pub fn default_cache_dir() -> Result<PathBuf, CodemeldError> {
    let home = dirs::home_dir().ok_or(CodemeldError::HomeDirNotFound)?;
    Ok(home.join(".cache").join(CACHE_DIR_NAME))
}

/// True for names shaped like `20240309_140507_deadbeef.md`.
pub fn is_cache_entry_name(name: &str) -> bool {
    static ENTRY_NAME: OnceLock<Regex> = OnceLock::new();
    ENTRY_NAME
        .get_or_init(|| {
            Regex::new(r"^\d{8}_\d{6}_[0-9A-Za-z]+\.md$").expect("valid cache entry pattern")
        })
        .is_match(name)
}

pub fn cache_file_name(created_at: &DateTime<Local>, id: &str) -> String {
    format!(
        "{}_{}.{}",
        created_at.format("%Y%m%d_%H%M%S"),
        id,
        CACHE_FILE_EXT
    )
}

/// A directory holding one file per run, bounded to `capacity` files.
pub struct CacheStore {
    dir: PathBuf,
    capacity: usize,
    ids: Box<dyn IdGenerator>,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>, capacity: usize, ids: Box<dyn IdGenerator>) -> Self {
        CacheStore {
            dir: dir.into(),
            capacity: capacity.max(1),
            ids,
        }
    }

    pub fn with_default_dir() -> Result<Self, CodemeldError> {
        Ok(CacheStore::new(
            default_cache_dir()?,
            MAX_CACHE_FILES,
            Box::new(RandomIdGenerator),
        ))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ensure_dir(&self) -> Result<&Path, CodemeldError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            CodemeldError::CacheDirError(format!("{}: {}", self.dir.display(), e))
        })?;
        Ok(&self.dir)
    }

    /// Cache entries written by this tool, oldest modification time first.
    /// Anything else in the directory is left alone.
    pub fn list_entries(&self) -> Result<Vec<PathBuf>, CodemeldError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !is_cache_entry_name(&entry.file_name().to_string_lossy()) {
                trace!("Ignoring foreign file in cache: {}", entry.path().display());
                continue;
            }
            let metadata = entry.metadata()?;
            if metadata.is_file() {
                entries.push((metadata.modified()?, entry.path()));
            }
        }
        entries.sort();
        Ok(entries.into_iter().map(|(_, path)| path).collect())
    }

    /// Evicts the oldest files so one more entry fits without exceeding capacity.
    /// Returns how many files were removed.
    pub fn rotate(&self) -> Result<usize, CodemeldError> {
        let entries = self
            .list_entries()
            .map_err(|e| CodemeldError::CacheRotateError(e.to_string()))?;
        let keep = self.capacity - 1;
        if entries.len() <= keep {
            trace!("Cache holds {} file(s), no rotation needed", entries.len());
            return Ok(0);
        }

        let excess = entries.len() - keep;
        for path in entries.iter().take(excess) {
            debug!("Removing old cache file: {}", path.display());
            fs::remove_file(path).map_err(|e| {
                CodemeldError::CacheRotateError(format!("{}: {}", path.display(), e))
            })?;
        }
        Ok(excess)
    }

    /// Rotates, then writes `content` to a new file and syncs it to disk.
    /// A failed rotation is logged and does not stop the write.
    pub async fn save(&self, content: &str) -> Result<CacheEntry, CodemeldError> {
        self.ensure_dir()?;

        match self.rotate() {
            Ok(0) => {}
            Ok(removed) => debug!("Removed {} old cache file(s)", removed),
            Err(e) => warn!("Failed to clean old cache files: {}", e),
        }

        let id = self.ids.generate();
        let created_at = Local::now();
        let path = self.dir.join(cache_file_name(&created_at, &id));
        write_synced(&path, content)
            .await
            .map_err(|e| CodemeldError::CacheWriteError(format!("{}: {}", path.display(), e)))?;

        info!("Saved cache file: {}", path.display());
        Ok(CacheEntry {
            id,
            created_at,
            path,
            size: content.len(),
        })
    }
}

async fn write_synced(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = async_fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    file.sync_all().await
}
