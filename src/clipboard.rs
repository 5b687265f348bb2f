use crate::errors::CodemeldError;
use arboard::Clipboard;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), CodemeldError>;
}

/// The platform clipboard, opened fresh for every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CodemeldError> {
        debug!("Initializing clipboard");
        let mut clipboard =
            Clipboard::new().map_err(|e| CodemeldError::ClipboardInitError(e.to_string()))?;

        debug!("Writing {} bytes to clipboard", text.len());
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| CodemeldError::ClipboardWriteError(e.to_string()))
    }
}
