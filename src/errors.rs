use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodemeldError {
    #[error("Failed to resolve files: {0}")]
    ResolveError(String),

    #[error("No matching files")]
    NoMatchingFiles,

    #[error("Home directory could not be determined")]
    HomeDirNotFound,

    #[error("Cache directory error: {0}")]
    CacheDirError(String),

    #[error("Cache rotation failed: {0}")]
    CacheRotateError(String),

    #[error("Cache write failed: {0}")]
    CacheWriteError(String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for CodemeldError {
    fn from(err: std::io::Error) -> Self {
        CodemeldError::IoError(err.to_string())
    }
}

impl From<walkdir::Error> for CodemeldError {
    fn from(err: walkdir::Error) -> Self {
        CodemeldError::ResolveError(err.to_string())
    }
}
