//! The in-memory role map. The [`Store`] only mirrors it.
//!
//! [`Store`]: crate::store::Store
use parking_lot::RwLock;
use rolebot::model::id::{GuildId, RoleId};

use std::collections::HashMap;

/// Maps guilds to their button-to-role mappings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleMap {
    guilds: HashMap<GuildId, HashMap<String, RoleId>>,
}

impl RoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, guild_id: GuildId, button_id: &str) -> Option<RoleId> {
        self.guilds.get(&guild_id)?.get(button_id).copied()
    }

    /// Maps `button_id` to `role_id` in a guild, creating the guild entry if needed.
    /// Returns the previously mapped role.
    pub fn insert<T>(&mut self, guild_id: GuildId, button_id: T, role_id: RoleId) -> Option<RoleId>
    where
        T: Into<String>,
    {
        self.guilds
            .entry(guild_id)
            .or_default()
            .insert(button_id.into(), role_id)
    }

    pub fn guild(&self, guild_id: GuildId) -> Option<&HashMap<String, RoleId>> {
        self.guilds.get(&guild_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GuildId, &HashMap<String, RoleId>)> {
        self.guilds.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.guilds.is_empty()
    }

    /// Returns the total number of mappings over all guilds.
    pub fn len(&self) -> usize {
        self.guilds.values().map(HashMap::len).sum()
    }
}

/// A versioned snapshot of the registry, handed to the store.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub version: u64,
    pub map: RoleMap,
}

/// The single process-wide registry. All mutations are a single assignment under the
/// write lock; the lock is never held across an await point.
#[derive(Debug, Default)]
pub struct Registry {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    map: RoleMap,
    version: u64,
}

impl Registry {
    pub fn new(map: RoleMap) -> Self {
        Self {
            inner: RwLock::new(Inner { map, version: 0 }),
        }
    }

    pub fn get(&self, guild_id: GuildId, button_id: &str) -> Option<RoleId> {
        self.inner.read().map.get(guild_id, button_id)
    }

    /// Sets a mapping, overwriting any previous one. Returns the snapshot including the
    /// change and the previously mapped role.
    pub fn set(&self, guild_id: GuildId, button_id: &str, role_id: RoleId) -> (Snapshot, Option<RoleId>) {
        let mut inner = self.inner.write();

        let previous = inner.map.insert(guild_id, button_id, role_id);
        inner.version += 1;

        let snapshot = Snapshot {
            version: inner.version,
            map: inner.map.clone(),
        };

        (snapshot, previous)
    }

    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.read();

        Snapshot {
            version: inner.version,
            map: inner.map.clone(),
        }
    }
}
