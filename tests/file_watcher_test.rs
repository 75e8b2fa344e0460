//! Tests for the debounced file watcher used by watch mode.

use inkpack::services::FileWatcher;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::test]
async fn test_change_to_watched_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let watched = dir.path().join("input.png");
    std::fs::write(&watched, b"one").unwrap();
    let watched = watched.canonicalize().unwrap();

    let mut watcher = FileWatcher::new(std::slice::from_ref(&watched)).unwrap();
    // give the backend a moment to register
    tokio::time::sleep(Duration::from_millis(100)).await;

    std::fs::write(&watched, b"two").unwrap();
    std::fs::write(&watched, b"three").unwrap();

    let event = tokio::time::timeout(TIMEOUT, watcher.changed())
        .await
        .expect("change reported in time")
        .expect("watcher still running");
    assert_eq!(event.paths, vec![watched]);
}

#[tokio::test]
async fn test_other_files_in_directory_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let watched = dir.path().join("input.png");
    std::fs::write(&watched, b"one").unwrap();

    let mut watcher = FileWatcher::new(&[watched]).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    std::fs::write(dir.path().join("other.png"), b"noise").unwrap();

    let result = tokio::time::timeout(Duration::from_millis(800), watcher.changed()).await;
    assert!(result.is_err(), "unexpected event: {result:?}");
}
