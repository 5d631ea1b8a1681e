//! Watches a tab snapshot file and reports when the host rewrote it
//!
//! Uses the `notify` crate with debouncing. The parent directory is watched
//! rather than the file itself so atomic rename-over writes are still seen.

use notify_debouncer_mini::{new_debouncer, DebouncedEventKind, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

/// Debounced watcher for a single snapshot file
pub struct SnapshotWatcher {
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    /// The snapshot file being watched
    target: PathBuf,
}

impl SnapshotWatcher {
    /// Start watching `target`
    ///
    /// Events are debounced with a 200ms delay so a burst of writes from the
    /// host reads as one change.
    pub fn new(target: PathBuf) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(Duration::from_millis(200), tx)?;

        let dir = watch_dir(&target);
        debouncer
            .watcher()
            .watch(&dir, notify::RecursiveMode::NonRecursive)?;

        tracing::info!("Watching tab snapshot {}", target.display());

        Ok(Self {
            _debouncer: debouncer,
            rx,
            target,
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Drain pending events (non-blocking)
    ///
    /// Returns true if the snapshot file changed since the last poll.
    pub fn poll_changed(&self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            changed |= self.batch_touches_target(result);
        }

        if changed {
            tracing::debug!("Tab snapshot changed: {}", self.target.display());
        }
        changed
    }

    /// Block until the watcher reports something or `timeout` elapses
    ///
    /// Returns true if the snapshot file changed. Anything else already
    /// queued is drained along with the first batch.
    pub fn wait_changed(&self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => {
                let first = self.batch_touches_target(result);
                self.poll_changed() || first
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("Snapshot watcher channel closed");
                std::thread::sleep(timeout);
                false
            }
        }
    }

    fn batch_touches_target(
        &self,
        result: Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>,
    ) -> bool {
        match result {
            Ok(events) => events.iter().any(|event| {
                !matches!(event.kind, DebouncedEventKind::AnyContinuous)
                    && is_snapshot_event(&self.target, &event.path)
            }),
            Err(e) => {
                tracing::warn!("Snapshot watcher error: {:?}", e);
                false
            }
        }
    }
}

/// Whether an event path refers to the snapshot file
///
/// A target without a file name (`/`, `..`) only matches itself.
fn is_snapshot_event(target: &Path, path: &Path) -> bool {
    if path == target {
        return true;
    }
    match (target.file_name(), path.file_name()) {
        (Some(want), Some(got)) => want == got,
        _ => false,
    }
}

/// Directory to watch for a snapshot file
fn watch_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
