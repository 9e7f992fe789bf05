use super::{Error, Result, Store};
use crate::registry::RoleMap;

use rolebot::model::id::{GuildId, RoleId};
use tempfile::NamedTempFile;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The on-disk layout: guild id -> button id -> role id, all as strings.
type Document = BTreeMap<String, BTreeMap<String, String>>;

/// A store writing the role map to a single pretty-printed JSON file.
#[derive(Clone, Debug)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the directory containing the file.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn io_error(&self, source: io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Store for JsonStore {
    fn ensure_location(&self) -> Result<()> {
        // `create_dir_all` succeeds if the directory exists or is created concurrently.
        fs::create_dir_all(self.dir()).map_err(|source| Error::Io {
            path: self.dir().to_path_buf(),
            source,
        })
    }

    fn load(&self) -> Result<Option<RoleMap>> {
        let buf = match fs::read(&self.path) {
            Ok(buf) => buf,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };

        let document: Document = serde_json::from_slice(&buf).map_err(|source| Error::Json {
            path: self.path.clone(),
            source,
        })?;

        Ok(Some(from_document(document)))
    }

    fn save(&self, map: &RoleMap) -> Result<()> {
        let mut file = NamedTempFile::new_in(self.dir()).map_err(|err| self.io_error(err))?;

        serde_json::to_writer_pretty(&mut file, &to_document(map)).map_err(|source| {
            Error::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        file.write_all(b"\n").map_err(|err| self.io_error(err))?;
        file.as_file().sync_all().map_err(|err| self.io_error(err))?;

        file.persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;

        Ok(())
    }
}

fn to_document(map: &RoleMap) -> Document {
    map.iter()
        .map(|(guild_id, buttons)| {
            let buttons = buttons
                .iter()
                .map(|(button_id, role_id)| (button_id.clone(), role_id.to_string()))
                .collect();

            (guild_id.to_string(), buttons)
        })
        .collect()
}

/// Converts the on-disk layout, dropping entries whose ids are not valid snowflakes.
fn from_document(document: Document) -> RoleMap {
    let mut map = RoleMap::new();

    for (guild_id, buttons) in document {
        let guild_id: GuildId = match guild_id.parse() {
            Ok(id) => id,
            Err(err) => {
                log::warn!("[STORE] Skipping invalid guild id {:?}: {}", guild_id, err);
                continue;
            }
        };

        for (button_id, role_id) in buttons {
            match role_id.parse::<RoleId>() {
                Ok(role_id) => {
                    map.insert(guild_id, button_id, role_id);
                }
                Err(err) => {
                    log::warn!(
                        "[STORE] Skipping invalid role id {:?} for button {} in guild {}: {}",
                        role_id,
                        button_id,
                        guild_id,
                        err
                    );
                }
            }
        }
    }

    map
}
