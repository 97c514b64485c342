//! Centralized initialization for commands that drive a session.
//!
//! Every command goes through the same steps before it can act on the
//! session, so they live here instead of in each command:
//!
//! 1. **Directories**: resolve config, data and cache locations
//! 2. **Configuration**: load `config.json`, creating it on first run
//! 3. **Catalog**: the built-in items or the configured catalog file
//! 4. **Session**: open the archive and resume the cached session snapshot
//!
//! After the command runs, the session snapshot is written back to the cache
//! so the next invocation continues where this one stopped.
//!
//! `config` stops after step 2 ([`CommandInit::initialize_settings`]) so it
//! can still repair a configuration whose catalog file has gone missing.

use crate::core::{
    archive::{Archive, JsonFileStore},
    catalog::Catalog,
    config::AppConfig,
    dirs::AppDirs,
    error::Result,
    session::Session,
    state::{self, SessionState},
};
use std::path::Path;

/// Directories and configuration, without the catalog
pub struct SettingsContext {
    pub dirs: AppDirs,
    pub config: AppConfig,
}

impl SettingsContext {
    /// Drop the cached session so the next command starts fresh
    pub fn forget_session(&self) -> Result<()> {
        state::clear_session(&self.dirs.cache)
    }
}

/// Everything a command needs before it touches the session
pub struct CommandContext {
    pub dirs: AppDirs,
    pub config: AppConfig,
    pub catalog: Catalog,
    saved_state: Option<SessionState>,
}

pub struct CommandInit;

impl CommandInit {
    /// Load directories and config only.
    ///
    /// Used by commands that must keep working when the configured catalog
    /// cannot be read.
    pub fn initialize_settings(home: Option<&Path>) -> Result<SettingsContext> {
        let dirs = AppDirs::resolve(home)?;
        log::debug!("Using directories: {dirs:?}");

        let config = AppConfig::load_or_create(&dirs.config)?;
        Ok(SettingsContext { dirs, config })
    }

    /// Load directories, config, catalog and cached session state
    ///
    /// # Arguments
    /// * `home` - Optional directory overriding all default locations
    ///
    /// # Returns
    /// * `Ok(CommandContext)` - Ready to run a session
    /// * `Err` - If the config or configured catalog cannot be read
    pub fn initialize(home: Option<&Path>) -> Result<CommandContext> {
        let SettingsContext { dirs, config } = Self::initialize_settings(home)?;

        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load_from_file(path)?,
            None => Catalog::builtin(),
        };

        let saved_state = state::load_session(&dirs.cache).unwrap_or_else(|e| {
            log::warn!("Starting a fresh session: {e}");
            None
        });

        Ok(CommandContext {
            dirs,
            config,
            catalog,
            saved_state,
        })
    }
}

impl CommandContext {
    /// Run one event against the session and persist the resulting snapshot.
    ///
    /// The snapshot is written even when the event fails, so a failed archive
    /// write does not also lose the swipe position.
    pub fn run<T, F>(self, event: F) -> Result<T>
    where
        F: FnOnce(&mut Session<'_, JsonFileStore>) -> Result<T>,
    {
        let archive = Archive::open(JsonFileStore::new(&self.dirs.data));
        let options = self.config.session_options();

        let mut session = match self.saved_state {
            Some(saved) => Session::restore(&self.catalog, archive, options, saved),
            None => Session::init(&self.catalog, archive, options),
        };

        let outcome = event(&mut session);

        let (snapshot, _archive) = session.teardown();
        if let Err(e) = state::save_session(&self.dirs.cache, &snapshot) {
            log::warn!("Session save failed (command result is unaffected): {e}");
        }

        outcome
    }
}
