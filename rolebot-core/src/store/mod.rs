//! Durable mirror of the [`Registry`].
//!
//! [`Registry`]: crate::registry::Registry
pub mod json;
pub mod mem;

pub use json::JsonStore;
pub use mem::MemStore;

use crate::config::FlushPolicy;
use crate::registry::{RoleMap, Snapshot};

use parking_lot::Mutex;
use thiserror::Error;

use std::io;
use std::path::PathBuf;
use std::result;
use std::sync::Arc;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A backend able to persist a [`RoleMap`]. Backends report every failure; the
/// [`MainStore`] decides what to do with them.
pub trait Store: Send + Sync + 'static {
    /// Creates the storage location if it does not exist yet. Must succeed if it
    /// already exists.
    fn ensure_location(&self) -> Result<()>;

    /// Reads the stored role map. Returns `None` if nothing was stored yet.
    fn load(&self) -> Result<Option<RoleMap>>;

    /// Replaces the stored role map with `map`.
    fn save(&self, map: &RoleMap) -> Result<()>;
}

/// Wraps a [`Store`] so that no persistence failure ever reaches a caller. Failures are
/// logged and the process keeps running with its in-memory state.
#[derive(Clone)]
pub struct MainStore {
    inner: Arc<dyn Store>,
    /// Version of the last snapshot written. Guards the file against being overwritten
    /// by an older snapshot.
    written: Arc<Mutex<u64>>,
}

impl MainStore {
    pub fn new<S>(store: S) -> Self
    where
        S: Store,
    {
        Self {
            inner: Arc::new(store),
            written: Arc::new(Mutex::new(0)),
        }
    }

    pub fn ensure_location(&self) {
        if let Err(err) = self.inner.ensure_location() {
            log::error!("[STORE] Failed to create storage location: {}", err);
        }
    }

    /// Loads the stored role map, falling back to an empty one.
    pub fn load(&self) -> RoleMap {
        match self.inner.load() {
            Ok(Some(map)) => {
                log::info!("[STORE] Loaded {} role mappings", map.len());
                map
            }
            Ok(None) => {
                log::info!("[STORE] No stored role map found, starting empty");
                RoleMap::new()
            }
            Err(err) => {
                log::warn!(
                    "[STORE] Failed to load role map, starting empty: {}",
                    err
                );
                RoleMap::new()
            }
        }
    }

    /// Writes `snapshot` unless a newer one was written already. Returns `true` if the
    /// snapshot is now on disk. Blocks the calling thread.
    pub fn save(&self, snapshot: &Snapshot) -> bool {
        let mut written = self.written.lock();
        if snapshot.version <= *written {
            log::debug!(
                "[STORE] Skipping snapshot {}, already wrote {}",
                snapshot.version,
                *written
            );
            return snapshot.version == *written;
        }

        match self.inner.save(&snapshot.map) {
            Ok(()) => {
                *written = snapshot.version;
                log::debug!("[STORE] Wrote snapshot {}", snapshot.version);
                true
            }
            Err(err) => {
                log::error!("[STORE] Failed to save role map: {}", err);
                false
            }
        }
    }

    /// Writes `snapshot` on a blocking thread according to `policy`.
    pub async fn flush(&self, snapshot: Snapshot, policy: FlushPolicy) {
        let store = self.clone();
        let handle = tokio::task::spawn_blocking(move || store.save(&snapshot));

        if policy == FlushPolicy::Sync {
            if let Err(err) = handle.await {
                log::error!("[STORE] Flush task failed: {}", err);
            }
        }
    }
}
