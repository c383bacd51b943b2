//! Persistence for registries.
//!
//! [`CommandStore`] is the capability interface the rest of the tool codes
//! against. [`JsonFileStore`] keeps the registry in a JSON file,
//! [`MemoryStore`] keeps it in memory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::Serialize;

use crate::error::{RegistryError, Result};
use crate::model::{Command, Page, Registry};

/// Load, save and query a registry.
pub trait CommandStore {
    /// Load the current registry.
    fn load(&self) -> Result<Registry>;

    /// Replace the stored registry.
    fn save(&self, registry: &Registry) -> Result<()>;

    /// Find a page by name.
    fn find_by_name(&self, name: &str) -> Result<Option<Page>> {
        Ok(self.load()?.find_page(name).cloned())
    }

    /// Find the first command with the given trigger, with its page name.
    fn find_by_trigger(&self, trigger: &str) -> Result<Option<(String, Command)>> {
        Ok(self
            .load()?
            .find_by_trigger(trigger)
            .map(|(page, cmd)| (page.name.clone(), cmd.clone())))
    }
}

/// A registry stored as a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RegistryError {
        RegistryError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> RegistryError {
        RegistryError::Json {
            path: self.path.clone(),
            source,
        }
    }
}

impl CommandStore for JsonFileStore {
    /// A missing file is an empty registry.
    fn load(&self) -> Result<Registry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!(
                    "{} not found, starting with an empty registry",
                    self.path.display()
                );
                return Ok(Registry::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let registry: Registry =
            serde_json::from_str(&content).map_err(|e| self.json_error(e))?;
        log::debug!(
            "loaded {} pages from {}",
            registry.pages.len(),
            self.path.display()
        );
        Ok(registry)
    }

    fn save(&self, registry: &Registry) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        registry
            .serialize(&mut serializer)
            .map_err(|e| self.json_error(e))?;
        buf.push(b'\n');

        fs::write(&self.path, buf).map_err(|e| self.io_error(e))?;
        log::debug!(
            "saved {} pages to {}",
            registry.pages.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// An in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    registry: RwLock<Registry>,
}

impl MemoryStore {
    /// Create a store holding `registry`.
    pub fn new(registry: Registry) -> Self {
        MemoryStore {
            registry: RwLock::new(registry),
        }
    }
}

impl CommandStore for MemoryStore {
    fn load(&self) -> Result<Registry> {
        Ok(self
            .registry
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, registry: &Registry) -> Result<()> {
        *self
            .registry
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = registry.clone();
        Ok(())
    }
}
