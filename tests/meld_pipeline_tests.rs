mod common;

use codemeld::cache::{CacheStore, MAX_CACHE_FILES};
use codemeld::errors::CodemeldError;
use codemeld::{meld_files, Request};
use common::{create_files, file_names_in, RecordingClipboard, RejectingClipboard, SequenceIds};
use std::fs;
use tempfile::tempdir;

#[tokio::test]
async fn project_is_melded_into_cache_and_clipboard() {
    let workspace = tempdir().unwrap();
    let cache = tempdir().unwrap();
    let project = workspace.path().join("project");
    create_files(&project, &["a.go", "b.txt", ".git/c.go", "pkg/d.go"], "package x");

    let request = Request::from_inputs(&project.display().to_string(), ".go", "", false);
    let store = CacheStore::new(cache.path(), MAX_CACHE_FILES, Box::new(SequenceIds::default()));
    let clipboard = RecordingClipboard::default();

    let outcome = meld_files(&request, &store, &clipboard).await.unwrap();

    assert_eq!(outcome.output.common_root, Some(project.clone()));
    assert_eq!(outcome.output.relative_paths, vec!["a.go", "pkg/d.go"]);
    let expected = "```a.go\npackage x\n```\n\n```pkg/d.go\npackage x\n```\n\n";
    let entry = outcome.report.cache.as_ref().unwrap();
    assert_eq!(fs::read_to_string(&entry.path).unwrap(), expected);
    assert_eq!(*clipboard.writes.lock().unwrap(), vec![expected]);
}

#[tokio::test]
async fn one_unreadable_file_does_not_fail_the_run() {
    let workspace = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_files(workspace.path(), &["a.rs", "b.rs", "c.rs"], "fn f() {}");
    // A dangling symlink is listed by the walk but cannot be read.
    #[cfg(unix)]
    {
        fs::remove_file(workspace.path().join("b.rs")).unwrap();
        std::os::unix::fs::symlink(workspace.path().join("gone.rs"), workspace.path().join("b.rs"))
            .unwrap();
    }

    let request = Request::from_inputs(&workspace.path().display().to_string(), ".rs", "", false);
    let store = CacheStore::new(cache.path(), MAX_CACHE_FILES, Box::new(SequenceIds::default()));

    let outcome = meld_files(&request, &store, &RecordingClipboard::default())
        .await
        .unwrap();

    assert_eq!(outcome.output.relative_paths, vec!["a.rs", "b.rs", "c.rs"]);
    #[cfg(unix)]
    {
        assert_eq!(outcome.output.failed_reads, vec![workspace.path().join("b.rs")]);
        assert!(outcome.output.content.contains("```b.rs\nError reading file "));
    }
    assert!(outcome.report.cache.is_ok());
}

#[tokio::test]
async fn clipboard_rejection_still_succeeds() {
    let workspace = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_files(workspace.path(), &["main.py"], "print('hi')");

    let request = Request::from_inputs(&workspace.path().display().to_string(), "", "", false);
    let store = CacheStore::new(cache.path(), MAX_CACHE_FILES, Box::new(SequenceIds::default()));

    let outcome = meld_files(&request, &store, &RejectingClipboard).await.unwrap();

    assert!(outcome.report.clipboard.is_err());
    assert_eq!(file_names_in(cache.path()).len(), 1);
}

#[tokio::test]
async fn nothing_matching_is_reported_and_nothing_is_delivered() {
    let workspace = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_files(workspace.path(), &["notes.txt"], "todo");

    let request = Request::from_inputs(&workspace.path().display().to_string(), ".go", "", false);
    let store = CacheStore::new(cache.path(), MAX_CACHE_FILES, Box::new(SequenceIds::default()));
    let clipboard = RecordingClipboard::default();

    let result = meld_files(&request, &store, &clipboard).await;

    assert!(matches!(result, Err(CodemeldError::NoMatchingFiles)));
    assert!(clipboard.writes.lock().unwrap().is_empty());
    assert!(file_names_in(cache.path()).is_empty());
}

#[tokio::test]
async fn unreadable_root_aborts_before_any_output() {
    let workspace = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_files(workspace.path(), &["a.go"], "package a");
    let inputs = format!(
        "{} {}",
        workspace.path().display(),
        workspace.path().join("missing").display()
    );

    let request = Request::from_inputs(&inputs, "", "", false);
    let store = CacheStore::new(cache.path(), MAX_CACHE_FILES, Box::new(SequenceIds::default()));
    let clipboard = RecordingClipboard::default();

    let result = meld_files(&request, &store, &clipboard).await;

    assert!(matches!(result, Err(CodemeldError::ResolveError(_))));
    assert!(clipboard.writes.lock().unwrap().is_empty());
    assert!(file_names_in(cache.path()).is_empty());
}
