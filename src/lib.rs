pub mod cache;
pub mod clipboard;
pub mod deliver;
pub mod errors;
pub mod formatter;
pub mod logger;
pub mod reporting;
pub mod request;
pub mod resolver;
pub mod trie;
pub mod utils;

pub use cache::{CacheEntry, CacheStore, IdGenerator, RandomIdGenerator, MAX_CACHE_FILES};
pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use deliver::{deliver, DeliveryReport};
pub use errors::CodemeldError;
pub use formatter::{format_files, FormattedOutput};
pub use request::Request;
pub use resolver::resolve;

use tracing::{debug, info};

#[derive(Debug)]
pub struct MeldOutcome {
    pub output: FormattedOutput,
    pub report: DeliveryReport,
}

/// Resolves, formats and delivers in that order, each stage finishing before
/// the next starts. Only resolution can fail; delivery problems land in the report.
pub async fn meld_files(
    request: &Request,
    store: &CacheStore,
    clipboard: &dyn ClipboardWriter,
) -> Result<MeldOutcome, CodemeldError> {
    debug!("Resolving {} root(s)", request.roots.len());
    let files = resolve(request)?;
    if files.is_empty() {
        return Err(CodemeldError::NoMatchingFiles);
    }

    let output = format_files(&files).await;
    info!(
        "Formatted {} file(s), {} bytes",
        output.relative_paths.len(),
        output.content.len()
    );

    let report = deliver(&output.payload(), store, clipboard).await;
    Ok(MeldOutcome { output, report })
}
