use crate::cache::{CacheEntry, CacheStore};
use crate::clipboard::ClipboardWriter;
use crate::errors::CodemeldError;
use tracing::{info, warn};

/// Outcome of each sink, kept apart so one failing never hides the other.
#[derive(Debug)]
pub struct DeliveryReport {
    pub cache: Result<CacheEntry, CodemeldError>,
    pub clipboard: Result<(), CodemeldError>,
}

impl DeliveryReport {
    pub fn any_delivered(&self) -> bool {
        self.cache.is_ok() || self.clipboard.is_ok()
    }
}

/// Writes the payload to the cache first, then to the clipboard. Never fails.
pub async fn deliver(
    payload: &str,
    store: &CacheStore,
    clipboard: &dyn ClipboardWriter,
) -> DeliveryReport {
    let cache = store.save(payload).await;
    if let Err(e) = &cache {
        warn!("Failed to save to cache: {}", e);
    }

    let clipboard = clipboard.write_text(payload).await;
    match &clipboard {
        Ok(()) => info!("Content copied to clipboard"),
        Err(e) => warn!("Failed to copy to clipboard: {}", e),
    }

    DeliveryReport { cache, clipboard }
}
