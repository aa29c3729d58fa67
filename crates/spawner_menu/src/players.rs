//! Connected-player watcher and the spawn target dropdown

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use spawner_core::PlayerDirectory;

/// Whether the connected list differs from the known one
///
/// A change is a different count or a name that was not known before.
pub fn players_changed(known: &[String], current: &[String]) -> bool {
    known.len() != current.len() || current.iter().any(|name| !known.contains(name))
}

/// Background thread polling the connected-player list
///
/// Polls only while the shared visibility flag is set and sends the new
/// list whenever it changed. Stopped on [`stop`](Self::stop) or drop.
pub struct PlayerWatcher {
    stop_tx: Option<Sender<()>>,
    changes: Receiver<Vec<String>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl PlayerWatcher {
    /// Start the watcher thread
    pub fn start(
        directory: Arc<dyn PlayerDirectory>,
        known: Vec<String>,
        interval: Duration,
        visible: Arc<AtomicBool>,
    ) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = crossbeam_channel::bounded(1);
        let (change_tx, changes) = crossbeam_channel::unbounded();

        let handle = thread::Builder::new()
            .name("player-watcher".to_string())
            .spawn(move || {
                Self::watch_loop(directory, known, interval, visible, stop_rx, change_tx);
            })?;

        log::info!("Player watcher started ({:?} interval)", interval);
        Ok(Self {
            stop_tx: Some(stop_tx),
            changes,
            thread_handle: Some(handle),
        })
    }

    fn watch_loop(
        directory: Arc<dyn PlayerDirectory>,
        mut known: Vec<String>,
        interval: Duration,
        visible: Arc<AtomicBool>,
        stop_rx: Receiver<()>,
        change_tx: Sender<Vec<String>>,
    ) {
        loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
            if !visible.load(Ordering::Relaxed) {
                continue;
            }

            let current = directory.connected_players().unwrap_or_default();
            if players_changed(&known, &current) {
                log::info!("Player list changed ({} connected)", current.len());
                known = current.clone();
                if change_tx.send(current).is_err() {
                    break;
                }
            }
        }
    }

    /// Latest list sent since the last poll
    pub fn poll(&self) -> Option<Vec<String>> {
        self.changes.try_iter().last()
    }

    pub fn is_running(&self) -> bool {
        self.thread_handle.is_some()
    }

    /// Signal the thread and wait for it to exit
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
            log::info!("Player watcher stopped");
        }
    }
}

impl Drop for PlayerWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn target options: the local player first, then everyone else
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerDropdown {
    options: Vec<String>,
    selected: usize,
}

impl PlayerDropdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the options, keeping the selected name when still present
    pub fn rebuild(&mut self, local_name: &str, connected: &[String]) {
        let previous = self.selected_name().map(str::to_owned);

        self.options.clear();
        self.options.push(local_name.to_string());
        self.options.extend(
            connected
                .iter()
                .filter(|name| name.as_str() != local_name)
                .cloned(),
        );

        self.selected = previous
            .and_then(|name| self.options.iter().position(|o| *o == name))
            .unwrap_or(0);
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    /// Select an option; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Whether the local player (first option) is selected
    pub fn is_local_selected(&self) -> bool {
        self.selected == 0
    }
}
