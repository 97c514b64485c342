//! Domain-specific error types for the outfit engine.
//!
//! This module defines [`OutfitError`], the single error type returned by every
//! engine operation, and [`ValidationError`], the reasons a save or catalog
//! load can be refused. Both use `thiserror` for their definitions.
//!
//! # Public API
//! - [`OutfitError`]: Main error enum covering all failure modes
//! - [`ValidationError`]: Rejected input (blank names, empty outfits, bad items)
//! - [`Result<T>`]: Type alias for `std::result::Result<T, OutfitError>`
//!
//! # Error Categories
//! - **Swiping**: no item left in the active queue
//! - **Validation**: blank outfit name, empty outfit, malformed catalog items
//! - **Lookups**: stale archive positions, unknown categories or genders
//! - **Persistence**: archive, session, catalog and config read/write failures
//!
//! None of these are fatal. Every failure is local to the operation that
//! raised it and leaves the engine state as it was, with one exception: a
//! failed archive write keeps the in-memory change (see [`OutfitError::PersistenceWrite`]).

use std::path::PathBuf;
use thiserror::Error;

/// Reasons an input is refused before any state changes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("empty outfit")]
    EmptyOutfit,

    #[error("blank name")]
    BlankName,

    #[error("item '{id}' has a negative or non-finite price")]
    NegativePrice { id: String },

    #[error("item '{id}' costs more than {max}")]
    PriceTooLarge { id: String, max: f64 },

    #[error("duplicate item id '{id}' in catalog")]
    DuplicateItemId { id: String },

    #[error("item '{id}' is stored in the {slot} slot but belongs to {category}")]
    CategoryMismatch {
        id: String,
        slot: String,
        category: String,
    },
}

/// Domain-specific error types for the outfit engine
#[derive(Error, Debug)]
pub enum OutfitError {
    // Swiping
    #[error("No items left to swipe in this category")]
    EmptyQueue,

    // Validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Lookups
    #[error("Index {index} is out of range ({len} available)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid position: '{input}'. Use format like: 1, 1-3, or 1,3,5")]
    InvalidPosition { input: String },

    #[error("Unknown category '{name}'. Expected one of: accessories, tops, bottoms, shoes")]
    UnknownCategory { name: String },

    #[error("Unknown gender '{name}'. Expected one of: women, men")]
    UnknownGender { name: String },

    #[error("Gender scoping is disabled. Enable it with: outfit-builder config --gender-scoping on")]
    GenderScopingDisabled,

    // Archive persistence
    #[error("Failed to read saved outfits from '{location}': {source}")]
    PersistenceRead {
        location: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The in-memory archive already holds the change; only the write failed.
    #[error("Failed to write saved outfits to '{location}': {source}. Changes are kept until exit but not saved")]
    PersistenceWrite {
        location: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // Catalog
    #[error("Failed to read catalog file '{path}': {source}")]
    CatalogReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    CatalogParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Session snapshot
    #[error("Failed to read session file '{path}': {source}")]
    SessionReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    SessionParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write session file '{path}': {source}")]
    SessionWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Configuration
    #[error("Could not determine the {kind} directory")]
    DirectoryNotFound { kind: &'static str },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using OutfitError
pub type Result<T> = std::result::Result<T, OutfitError>;

impl OutfitError {
    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an invalid position error
    pub fn invalid_position(input: impl Into<String>) -> Self {
        Self::InvalidPosition {
            input: input.into(),
        }
    }

    /// Create an unknown category error
    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory { name: name.into() }
    }

    /// Create an unknown gender error
    pub fn unknown_gender(name: impl Into<String>) -> Self {
        Self::UnknownGender { name: name.into() }
    }

    /// Create a persistence read error
    pub fn persistence_read<E>(location: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::PersistenceRead {
            location: location.into(),
            source: Box::new(source),
        }
    }

    /// Create a persistence write error
    pub fn persistence_write<E>(location: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::PersistenceWrite {
            location: location.into(),
            source: Box::new(source),
        }
    }

    /// Create a catalog read failed error
    pub fn catalog_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CatalogReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a catalog parse failed error
    pub fn catalog_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CatalogParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn session_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SessionReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn session_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SessionParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn session_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SessionWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// True for errors the user caused and can fix by retrying differently
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyQueue
                | Self::Validation(_)
                | Self::IndexOutOfRange { .. }
                | Self::InvalidPosition { .. }
                | Self::UnknownCategory { .. }
                | Self::UnknownGender { .. }
                | Self::GenderScopingDisabled
        )
    }
}
