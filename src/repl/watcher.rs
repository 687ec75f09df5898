use crossbeam_channel::Sender;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};

/// Watches command scripts for saves. notify runs the watch on its own
/// threads and every event is forwarded to a channel.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    watched: Vec<PathBuf>,
}

impl FileWatcher {
    /// Create a new file watcher that sends events to the provided channel
    pub fn new(tx: Sender<notify::Result<Event>>) -> notify::Result<Self> {
        let watcher = notify::recommended_watcher(move |res| {
            // Receiver gone means the REPL is shutting down
            let _ = tx.send(res);
        })?;

        Ok(Self {
            watcher,
            watched: Vec::new(),
        })
    }

    /// Add a path to be watched. Watching the same path twice is a no-op.
    pub fn watch<P: AsRef<Path>>(&mut self, path: P) -> notify::Result<()> {
        let path = path.as_ref();
        if self.is_watching(path) {
            return Ok(());
        }
        self.watcher.watch(path, RecursiveMode::NonRecursive)?;
        self.watched.push(path.to_path_buf());
        Ok(())
    }

    /// Remove a path from being watched
    pub fn unwatch<P: AsRef<Path>>(&mut self, path: P) -> notify::Result<()> {
        let path = path.as_ref();
        self.watcher.unwatch(path)?;
        self.watched.retain(|p| p != path);
        Ok(())
    }

    pub fn is_watching(&self, path: &Path) -> bool {
        self.watched.iter().any(|p| p == path)
    }
}

/// Whether an event means the script's contents may have changed
pub fn is_reload(event: &Event) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
}
