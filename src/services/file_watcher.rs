//! File watcher for watch mode.
//!
//! Watches a set of files (the input image, and the board file if one is
//! configured) and reports debounced change events. Editors often write a
//! file in several steps, so events are collected for a short window before
//! one is emitted.

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

const DEBOUNCE: Duration = Duration::from_millis(200);

/// Event sent when watched files change
#[derive(Debug, Clone)]
pub struct FileChangeEvent {
    /// Watched paths that changed
    pub paths: Vec<PathBuf>,
}

/// Watches individual files by watching their parent directories
pub struct FileWatcher {
    receiver: mpsc::Receiver<FileChangeEvent>,
    /// Handle to the watcher (kept alive)
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Start watching `files`. Must be called from within a tokio runtime.
    pub fn new(files: &[PathBuf]) -> Result<Self, notify::Error> {
        let targets: HashSet<PathBuf> = files.iter().map(|p| canonical(p)).collect();
        let dirs: HashSet<PathBuf> = targets
            .iter()
            .filter_map(|p| p.parent().map(Path::to_path_buf))
            .collect();

        let (raw_tx, mut raw_rx) = mpsc::channel::<PathBuf>(100);
        let (tx, rx) = mpsc::channel::<FileChangeEvent>(16);

        // Debounce: after the first change, collect everything that arrives
        // within the window and send one event.
        tokio::spawn(async move {
            while let Some(first) = raw_rx.recv().await {
                let mut pending = HashSet::from([first]);
                tokio::time::sleep(DEBOUNCE).await;
                while let Ok(path) = raw_rx.try_recv() {
                    pending.insert(path);
                }
                let mut paths: Vec<PathBuf> = pending.into_iter().collect();
                paths.sort();
                tracing::debug!(paths = ?paths, "Files changed (debounced)");
                if tx.send(FileChangeEvent { paths }).await.is_err() {
                    break;
                }
            }
        });

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<notify::Event, notify::Error>| {
                if let Ok(event) = res {
                    if !(event.kind.is_modify() || event.kind.is_create()) {
                        return;
                    }
                    for path in event.paths {
                        let path = canonical(&path);
                        if targets.contains(&path) {
                            let _ = raw_tx.blocking_send(path);
                        }
                    }
                }
            },
            Config::default(),
        )?;

        for dir in &dirs {
            watcher.watch(dir, RecursiveMode::NonRecursive)?;
            tracing::info!(path = %dir.display(), "File watcher started");
        }

        Ok(Self {
            receiver: rx,
            _watcher: watcher,
        })
    }

    /// Wait for the next batch of changes. `None` once the watcher has stopped.
    pub async fn changed(&mut self) -> Option<FileChangeEvent> {
        self.receiver.recv().await
    }
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
