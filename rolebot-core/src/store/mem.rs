use super::{Error, Result, Store};
use crate::registry::RoleMap;

use parking_lot::Mutex;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// A store keeping the role map in memory. Contents are lost on restart; clones share
/// the same contents.
#[derive(Clone, Debug, Default)]
pub struct MemStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    map: Option<RoleMap>,
    failing: bool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following operation fail with an I/O error while `failing` is set.
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().failing = failing;
    }

    /// Returns the currently stored role map.
    pub fn get(&self) -> Option<RoleMap> {
        self.inner.lock().map.clone()
    }

    fn check(inner: &Inner) -> Result<()> {
        if inner.failing {
            return Err(Error::Io {
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is failing"),
            });
        }

        Ok(())
    }
}

impl Store for MemStore {
    fn ensure_location(&self) -> Result<()> {
        Self::check(&self.inner.lock())
    }

    fn load(&self) -> Result<Option<RoleMap>> {
        let inner = self.inner.lock();
        Self::check(&inner)?;

        Ok(inner.map.clone())
    }

    fn save(&self, map: &RoleMap) -> Result<()> {
        let mut inner = self.inner.lock();
        Self::check(&inner)?;

        inner.map = Some(map.clone());
        Ok(())
    }
}
