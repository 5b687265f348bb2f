use crate::errors::CodemeldError;
use crate::request::Request;
use crate::utils::{absolutize, dotted_extension};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Walks every root in order and returns the absolute paths of the files that
/// pass the request's filters. Directories are visited in file-name order so
/// the result is reproducible.
///
/// Roots themselves are never pruned as hidden; only directories found while
/// walking are.
pub fn resolve(request: &Request) -> Result<Vec<PathBuf>, CodemeldError> {
    let cwd = std::env::current_dir()
        .map_err(|e| CodemeldError::ResolveError(format!("current directory: {}", e)))?;
    let mut files = Vec::new();

    for root in &request.roots {
        let root = absolutize(root, &cwd);
        debug!("Walking root: {}", root.display());

        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| keep_entry(entry, request.include_hidden));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            if should_include_file(entry.path(), request) {
                trace!("Including file: {}", entry.path().display());
                files.push(entry.into_path());
            } else {
                trace!("Filtered out: {}", entry.path().display());
            }
        }
    }

    debug!("Resolved {} file(s)", files.len());
    Ok(files)
}

fn keep_entry(entry: &DirEntry, include_hidden: bool) -> bool {
    if include_hidden || entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let hidden = is_hidden_dir_name(&entry.file_name().to_string_lossy());
    if hidden {
        debug!("Skipping hidden directory: {}", entry.path().display());
    }
    !hidden
}

pub fn is_hidden_dir_name(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

/// Exclusions win over inclusions; an empty include list admits everything.
pub fn should_include_file(path: &Path, request: &Request) -> bool {
    let ext = dotted_extension(path);

    if request.exclude_extensions.iter().any(|e| *e == ext) {
        return false;
    }

    if request.include_extensions.is_empty() {
        return true;
    }

    request.include_extensions.iter().any(|e| *e == ext)
}
