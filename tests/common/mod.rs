#![allow(dead_code)]

use async_trait::async_trait;
use codemeld::cache::IdGenerator;
use codemeld::clipboard::ClipboardWriter;
use codemeld::errors::CodemeldError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Hands out 00000000, 00000001, ... so cache names sort in creation order.
#[derive(Default)]
pub struct SequenceIds {
    next: AtomicUsize,
}

impl IdGenerator for SequenceIds {
    fn generate(&self) -> String {
        format!("{:08x}", self.next.fetch_add(1, Ordering::SeqCst))
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Mutex<Vec<String>>,
}

#[async_trait]
impl ClipboardWriter for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CodemeldError> {
        self.writes.lock().unwrap().push(text.to_owned());
        Ok(())
    }
}

pub struct RejectingClipboard;

#[async_trait]
impl ClipboardWriter for RejectingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CodemeldError> {
        Err(CodemeldError::ClipboardWriteError(format!(
            "payload of {} bytes is too large",
            text.len()
        )))
    }
}

/// Creates each relative path under `root` with `content`, making parents as needed.
pub fn create_files(root: &Path, files: &[&str], content: &str) -> Vec<PathBuf> {
    files
        .iter()
        .map(|file| {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
            path
        })
        .collect()
}

pub fn file_names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
