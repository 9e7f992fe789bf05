use log::LevelFilter;
use serde::{Deserialize, Serialize};

use std::path::PathBuf;

/// Name of the role map file inside the data directory.
pub const STORE_FILE: &str = "role_map.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing)]
    pub token: String,
    pub loglevel: LevelFilter,
    /// Directory holding the role map file.
    pub data_dir: PathBuf,
    pub flush: FlushPolicy,
}

impl Config {
    /// Returns the full path of the role map file.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            loglevel: LevelFilter::Info,
            data_dir: PathBuf::from("./data"),
            flush: FlushPolicy::default(),
        }
    }
}

/// When a configuration change is written to disk relative to acknowledging it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlushPolicy {
    /// Wait for the write before acknowledging. Write failures are still only logged.
    Sync,
    /// Spawn the write and acknowledge immediately.
    Async,
}

impl Default for FlushPolicy {
    fn default() -> Self {
        Self::Sync
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, FlushPolicy};
    use log::LevelFilter;

    use std::path::Path;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.loglevel, LevelFilter::Info);
        assert_eq!(config.flush, FlushPolicy::Sync);
        assert_eq!(config.store_path(), Path::new("./data/role_map.json"));
    }

    #[test]
    fn test_config_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            loglevel = "debug"
            data_dir = "/var/lib/rolebot"
            flush = "async"
            "#,
        )
        .unwrap();

        assert_eq!(config.token, "");
        assert_eq!(config.loglevel, LevelFilter::Debug);
        assert_eq!(config.flush, FlushPolicy::Async);
        assert_eq!(
            config.store_path(),
            Path::new("/var/lib/rolebot/role_map.json")
        );
    }
}
