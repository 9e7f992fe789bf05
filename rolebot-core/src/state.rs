use crate::config::Config;
use crate::registry::Registry;
use crate::store::MainStore;

use rolebot::model::id::{GuildId, RoleId};

use std::fmt::{self, Debug, Formatter};

/// The global shared state, passed to every handler.
pub struct State {
    pub config: Config,
    registry: Registry,
    store: MainStore,
}

impl State {
    /// Creates a new `State`, initializing the registry from `store`.
    pub fn new(config: Config, store: MainStore) -> Self {
        store.ensure_location();
        let map = store.load();

        Self {
            config,
            registry: Registry::new(map),
            store,
        }
    }

    /// Returns a reference to the internal [`Registry`].
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns a reference to the internal [`MainStore`].
    pub fn store(&self) -> &MainStore {
        &self.store
    }

    /// Maps a button to a role in a guild and flushes the registry according to the
    /// configured [`FlushPolicy`]. The in-memory mapping is applied even if the flush
    /// fails. Returns the previously mapped role.
    ///
    /// [`FlushPolicy`]: crate::config::FlushPolicy
    pub async fn set_mapping(
        &self,
        guild_id: GuildId,
        button_id: &str,
        role_id: RoleId,
    ) -> Option<RoleId> {
        let (snapshot, previous) = self.registry.set(guild_id, button_id, role_id);

        self.store.flush(snapshot, self.config.flush).await;

        previous
    }

    /// Writes the current registry, waiting for the write to finish.
    pub async fn flush(&self) {
        let snapshot = self.registry.snapshot();
        self.store
            .flush(snapshot, crate::config::FlushPolicy::Sync)
            .await;
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish()
    }
}
