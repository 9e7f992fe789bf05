use rolebot_core::config::Config;
use thiserror::Error;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable holding the bot token.
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Environment variable overriding the data directory, e.g. a mounted volume.
pub const DATA_DIR_VAR: &str = "DATA_DIR";

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("no token configured, set {} or the token key in the config file", TOKEN_VAR)]
    MissingToken,
}

/// Reads the config file at `path`. Returns `None` if the file does not exist.
pub fn from_file<P>(path: P) -> Result<Option<Config>, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let buf = match fs::read_to_string(path) {
        Ok(buf) => buf,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    toml::from_str(&buf).map(Some).map_err(|source| Error::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the config file at `path`, falling back to the defaults if it does not exist,
/// and applies the environment overrides read through `var`.
pub fn load<P, F>(path: P, var: F) -> Result<Config, Error>
where
    P: AsRef<Path>,
    F: Fn(&str) -> Option<String>,
{
    let mut config = from_file(path)?.unwrap_or_default();
    apply_env(&mut config, var);

    Ok(config)
}

/// Checks that `config` can be used to connect.
pub fn validate(config: &Config) -> Result<(), Error> {
    if config.token.is_empty() {
        return Err(Error::MissingToken);
    }

    Ok(())
}

fn apply_env<F>(config: &mut Config, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = var(TOKEN_VAR) {
        let token = token.trim();
        if !token.is_empty() {
            config.token = token.to_owned();
        }
    }

    if let Some(data_dir) = var(DATA_DIR_VAR) {
        let data_dir = data_dir.trim();
        if !data_dir.is_empty() {
            config.data_dir = PathBuf::from(data_dir);
        }
    }
}
