//! Session snapshot persisted between command invocations.
//!
//! Each CLI call handles one user event, so the live session (category,
//! gender scope, queue order, outfit) is cached as JSON and resumed on the
//! next call. The saved-outfit archive is not part of this file.
//!
//! # Cache Strategy
//! - **JSON serialization**: Human-readable session file for debugging
//! - **Timestamping**: Track when the session was last touched
//! - **Soft failure**: An unreadable file means a fresh session, not an error

use crate::core::category::Gender;
use crate::core::error::{OutfitError, Result};
use crate::core::outfit::Outfit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub category_index: usize,
    #[serde(default)]
    pub gender: Option<Gender>,
    pub queue: Vec<String>,
    pub outfit: Outfit,
    pub last_updated: DateTime<Utc>,
}

impl SessionState {
    pub fn new(
        category_index: usize,
        gender: Option<Gender>,
        queue: Vec<String>,
        outfit: Outfit,
    ) -> Self {
        Self {
            category_index,
            gender,
            queue,
            outfit,
            last_updated: Utc::now(),
        }
    }
}

/// Location of the session file inside a cache directory
pub fn session_file(cache_dir: &Path) -> PathBuf {
    cache_dir.join(SESSION_FILE)
}

/// Load the cached session, `Ok(None)` if there is none yet
pub fn load_session(cache_dir: &Path) -> Result<Option<SessionState>> {
    let path = session_file(cache_dir);
    if !path.exists() {
        log::debug!("No session file at {}", path.display());
        return Ok(None);
    }

    let content =
        fs::read_to_string(&path).map_err(|e| OutfitError::session_read_failed(&path, e))?;
    let state: SessionState =
        serde_json::from_str(&content).map_err(|e| OutfitError::session_parse_failed(&path, e))?;

    log::debug!(
        "Loaded session from {} (last updated {})",
        path.display(),
        state.last_updated
    );
    Ok(Some(state))
}

pub fn save_session(cache_dir: &Path, state: &SessionState) -> Result<()> {
    fs::create_dir_all(cache_dir)
        .map_err(|e| OutfitError::session_write_failed(cache_dir, e))?;

    let path = session_file(cache_dir);
    let json = serde_json::to_string_pretty(state)?;
    fs::write(&path, json).map_err(|e| {
        log::error!("Failed to write session file '{}': {e}", path.display());
        OutfitError::session_write_failed(&path, e)
    })?;

    log::debug!("Session saved to {}", path.display());
    Ok(())
}

/// Forget the cached session
pub fn clear_session(cache_dir: &Path) -> Result<()> {
    let path = session_file(cache_dir);
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}
