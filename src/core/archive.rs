//! Saved outfit archive and its storage.
//!
//! The [`Archive`] keeps the named outfits in insertion order and writes the
//! whole list back to its [`ArchiveStore`] after every append or delete.
//! Storage is injected so the engine never touches ambient globals: the CLI
//! uses [`JsonFileStore`], tests and embedders can use [`MemoryStore`].
//!
//! # Public API
//! - [`SavedOutfit`]: A named outfit as stored
//! - [`Archive`]: list / save / load / delete over a store
//! - [`ArchiveStore`]: Read and overwrite one serialized blob
//! - [`JsonFileStore`], [`MemoryStore`]: Store implementations
//!
//! # Failure Model
//! - **Reads**: a missing or unparseable blob yields an empty archive and a
//!   warning, never an error
//! - **Writes**: full overwrite through a temp file and rename, so the old
//!   blob survives a failed write. The in-memory archive keeps the change
//!   and the error is returned to the caller

use crate::core::error::{OutfitError, Result, ValidationError};
use crate::core::outfit::Outfit;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Storage key the archive is written under
pub const ARCHIVE_KEY: &str = "savedOutfits";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedOutfit {
    pub name: String,
    pub items: Outfit,
}

/// A place that holds the serialized archive
pub trait ArchiveStore {
    /// Human readable location for error messages
    fn location(&self) -> String;

    /// Read the stored blob, `Ok(None)` when nothing was ever written
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored blob
    fn write(&self, contents: &str) -> Result<()>;
}

/// Stores the archive as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{ARCHIVE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArchiveStore for JsonFileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            log::debug!("No archive file at {}", self.path.display());
            return Ok(None);
        }
        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| OutfitError::persistence_read(self.location(), e))
    }

    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| OutfitError::persistence_write(self.location(), e))?;
        }

        // Rename over the old file so a failed write never truncates it
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                log::error!("Failed to write archive '{}': {e}", self.path.display());
                let _ = fs::remove_file(&tmp);
                OutfitError::persistence_write(self.location(), e)
            })
    }
}

/// In-memory store; clones share the same blob
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Rc<RefCell<Option<String>>>,
    fail_writes: Rc<RefCell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        let store = Self::default();
        *store.blob.borrow_mut() = Some(contents.into());
        store
    }

    pub fn contents(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    /// Make subsequent writes fail, simulating unavailable storage
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }
}

impl ArchiveStore for MemoryStore {
    fn location(&self) -> String {
        format!("memory:{ARCHIVE_KEY}")
    }

    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.borrow().clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        if *self.fail_writes.borrow() {
            let err = std::io::Error::new(std::io::ErrorKind::Other, "storage unavailable");
            return Err(OutfitError::persistence_write(self.location(), err));
        }
        *self.blob.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}

#[derive(Debug)]
pub struct Archive<S: ArchiveStore> {
    store: S,
    entries: Vec<SavedOutfit>,
}

impl<S: ArchiveStore> Archive<S> {
    /// Load the archive from its store, degrading to empty on any read problem
    pub fn open(store: S) -> Self {
        let entries = match Self::read_entries(&store) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Starting with an empty archive: {e}");
                Vec::new()
            }
        };
        log::debug!("Archive opened with {} saved outfits", entries.len());
        Self { store, entries }
    }

    fn read_entries(store: &S) -> Result<Vec<SavedOutfit>> {
        let Some(content) = store.read()? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&content)
            .map_err(|e| OutfitError::persistence_read(store.location(), e))
    }

    pub fn list(&self) -> &[SavedOutfit] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a named outfit and persist. Names need not be unique.
    pub fn save(&mut self, name: &str, outfit: &Outfit) -> Result<()> {
        if outfit.is_empty() {
            return Err(ValidationError::EmptyOutfit.into());
        }
        if name.trim().is_empty() {
            return Err(ValidationError::BlankName.into());
        }

        self.entries.push(SavedOutfit {
            name: name.to_string(),
            items: outfit.clone(),
        });
        log::debug!("Saved outfit '{name}' at position {}", self.entries.len() - 1);
        self.persist()
    }

    /// Copy of the outfit stored at `index`
    pub fn load(&self, index: usize) -> Result<Outfit> {
        self.entries
            .get(index)
            .map(|saved| saved.items.clone())
            .ok_or_else(|| OutfitError::index_out_of_range(index, self.entries.len()))
    }

    pub fn delete(&mut self, index: usize) -> Result<SavedOutfit> {
        if index >= self.entries.len() {
            return Err(OutfitError::index_out_of_range(index, self.entries.len()));
        }
        let removed = self.entries.remove(index);
        log::debug!("Deleted outfit '{}' from position {index}", removed.name);
        self.persist()?;
        Ok(removed)
    }

    /// Delete several positions with a single write.
    ///
    /// Every index is checked before anything is removed.
    pub fn delete_many(&mut self, indices: &[usize]) -> Result<Vec<SavedOutfit>> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        if let Some(&bad) = sorted.iter().find(|&&index| index >= self.entries.len()) {
            return Err(OutfitError::index_out_of_range(bad, self.entries.len()));
        }

        let mut removed: Vec<SavedOutfit> = sorted
            .iter()
            .rev()
            .map(|&index| self.entries.remove(index))
            .collect();
        removed.reverse();

        if !removed.is_empty() {
            self.persist()?;
        }
        Ok(removed)
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| OutfitError::persistence_write(self.store.location(), e))?;
        self.store.write(&json)
    }
}
