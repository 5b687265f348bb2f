use crate::utils::to_slash_path;
use std::path::{Component, Path, PathBuf};
use tokio::fs as async_fs;
use tracing::{debug, trace, warn};

/// The melded block together with what was needed to build it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutput {
    pub common_root: Option<PathBuf>,
    pub content: String,
    /// One label per input file, in input order, always `/` separated.
    pub relative_paths: Vec<String>,
    /// Bytes of text rendered for each file, parallel to `relative_paths`.
    pub sizes: Vec<usize>,
    /// Files whose content was replaced by an error marker.
    pub failed_reads: Vec<PathBuf>,
}

impl FormattedOutput {
    /// What gets handed to the cache and the clipboard.
    pub fn payload(&self) -> String {
        format!("{}\n\n", self.content)
    }
}

/// Longest shared leading run of components among the files' parent
/// directories, so the root is always a directory and every label names a file.
pub fn common_root(paths: &[PathBuf]) -> Option<PathBuf> {
    let mut dirs = paths
        .iter()
        .map(|p| p.parent().unwrap_or_else(|| Path::new("")));
    let first = dirs.next()?;

    let mut prefix: Vec<Component> = first.components().collect();
    for dir in dirs {
        let shared = prefix
            .iter()
            .zip(dir.components())
            .take_while(|(a, b)| **a == *b)
            .count();
        prefix.truncate(shared);
    }

    Some(prefix.into_iter().collect())
}

pub fn relative_label(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => to_slash_path(relative),
        Err(_) => to_slash_path(path),
    }
}

/// Reads a file as text. Failures come back as an inline marker, never as an error.
pub async fn read_file_content(path: &Path) -> Result<String, String> {
    match async_fs::read(path).await {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            warn!("Failed to read file {}: {}", path.display(), e);
            Err(format!("Error reading file {}: {}", path.display(), e))
        }
    }
}

pub fn format_section(label: &str, content: &str) -> String {
    format!("```{}\n{}\n```", label, content)
}

pub async fn format_files(files: &[PathBuf]) -> FormattedOutput {
    let root = common_root(files);
    debug!("Common root: {:?}", root);

    let mut sections = Vec::with_capacity(files.len());
    let mut relative_paths = Vec::with_capacity(files.len());
    let mut sizes = Vec::with_capacity(files.len());
    let mut failed_reads = Vec::new();

    for file in files {
        let label = match &root {
            Some(root) => relative_label(root, file),
            None => to_slash_path(file),
        };
        let content = match read_file_content(file).await {
            Ok(content) => content,
            Err(marker) => {
                failed_reads.push(file.clone());
                marker
            }
        };
        trace!("Formatted {} ({} bytes)", label, content.len());
        sections.push(format_section(&label, &content));
        sizes.push(content.len());
        relative_paths.push(label);
    }

    FormattedOutput {
        common_root: root,
        content: sections.join("\n\n"),
        relative_paths,
        sizes,
        failed_reads,
    }
}
