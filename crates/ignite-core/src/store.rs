//! Persistence of the last used configuration
//!
//! There is exactly one slot: every successful fresh resolution overwrites it.

use crate::config::ProjectConfiguration;
use crate::error::{IgniteError, Result};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// File name of the saved configuration in the home directory
pub const CONFIG_FILE_NAME: &str = ".ignite-config.json";

/// Environment variable that overrides where the configuration is saved
pub const CONFIG_PATH_ENV: &str = "IGNITE_CONFIG_PATH";

/// Load/save access to the single "last used" configuration
pub trait ConfigStore {
    /// The saved configuration, or `None` when nothing was saved yet
    fn load(&self) -> Result<Option<ProjectConfiguration>>;

    /// Replace the saved configuration
    fn save(&self, config: &ProjectConfiguration) -> Result<()>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for &S {
    fn load(&self) -> Result<Option<ProjectConfiguration>> {
        (**self).load()
    }

    fn save(&self, config: &ProjectConfiguration) -> Result<()> {
        (**self).save(config)
    }
}

/// Pretty-printed JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$IGNITE_CONFIG_PATH`, falling back to `~/.ignite-config.json`
    pub fn from_env() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(CONFIG_FILE_NAME)
            });
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonFileStore {
    fn load(&self) -> Result<Option<ProjectConfiguration>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(IgniteError::CacheRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| IgniteError::CacheFormat {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&self, config: &ProjectConfiguration) -> Result<()> {
        let json = serde_json::to_string_pretty(config).map_err(|source| {
            IgniteError::CacheFormat {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| IgniteError::CacheWrite {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        std::fs::write(&self.path, json).map_err(|source| IgniteError::CacheWrite {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory slot, used where nothing should touch the home directory
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<ProjectConfiguration>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(config: ProjectConfiguration) -> Self {
        Self {
            slot: RefCell::new(Some(config)),
        }
    }

    /// Current content of the slot
    pub fn saved(&self) -> Option<ProjectConfiguration> {
        self.slot.borrow().clone()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<Option<ProjectConfiguration>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, config: &ProjectConfiguration) -> Result<()> {
        *self.slot.borrow_mut() = Some(config.clone());
        Ok(())
    }
}
