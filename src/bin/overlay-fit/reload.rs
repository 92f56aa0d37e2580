//! Live reload of on-disk overlay manifests.
//!
//! Content edits shift the overlay's metrics the same way late-loading
//! fonts or images do, so a change triggers a full remeasure-and-rescale.

use eframe::egui;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, TryRecvError};

/// Watches an overlay manifest for changes.
pub struct ManifestWatcher {
    change_rx: Receiver<()>,
    /// The watcher must be kept alive for events to fire
    _watcher: RecommendedWatcher,
}

impl ManifestWatcher {
    /// Creates a new manifest watcher.
    ///
    /// Returns `None` if the path has no parent directory or watching fails;
    /// the viewer then runs without live reload.
    pub fn new(manifest_path: &Path, ctx: egui::Context) -> Option<Self> {
        let dir = manifest_path.parent()?.to_path_buf();
        let file_name = manifest_path.file_name()?.to_owned();
        let (change_tx, change_rx) = mpsc::channel();

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res
                && matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
            {
                for path in event.paths {
                    if path.file_name().is_some_and(|name| name == file_name.as_os_str()) {
                        let _ = change_tx.send(());
                        ctx.request_repaint();
                    }
                }
            }
        })
        .ok()?;

        watcher.watch(&dir, RecursiveMode::NonRecursive).ok()?;

        log::info!("Watching overlay manifest: {}", manifest_path.display());

        Some(Self {
            change_rx,
            _watcher: watcher,
        })
    }

    /// True when the manifest changed since the last poll. Bursts of events
    /// from one save collapse into a single reload.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.change_rx.try_recv() {
                Ok(()) => changed = true,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Manifest watcher channel disconnected");
                    break;
                }
            }
        }
        changed
    }
}
