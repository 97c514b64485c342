use crate::core::error::{OutfitError, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "outfit-builder";

/// Where the app keeps its config, data and cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub config: PathBuf,
    pub data: PathBuf,
    pub cache: PathBuf,
}

impl AppDirs {
    /// Resolve the directories, placing all three under `home` when given
    pub fn resolve(home: Option<&Path>) -> Result<Self> {
        if let Some(home) = home {
            return Ok(Self::under(home));
        }
        Ok(Self {
            config: get_config_directory()?,
            data: get_data_directory()?,
            cache: get_cache_directory()?,
        })
    }

    pub fn under(home: &Path) -> Self {
        Self {
            config: home.join("config"),
            data: home.join("data"),
            cache: home.join("cache"),
        }
    }
}

fn home() -> Result<PathBuf> {
    dirs::home_dir().ok_or(OutfitError::DirectoryNotFound { kind: "home" })
}

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => home()?.join(".config"),
        },
        "macos" => home()?.join("Library/Application Support"),
        _ => dirs::config_dir().ok_or(OutfitError::DirectoryNotFound { kind: "config" })?,
    };

    Ok(base.join(APP_DIR))
}

pub fn get_data_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => match std::env::var("XDG_DATA_HOME") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => home()?.join(".local/share"),
        },
        "macos" => home()?.join("Library/Application Support"),
        _ => dirs::data_dir().ok_or(OutfitError::DirectoryNotFound { kind: "data" })?,
    };

    Ok(base.join(APP_DIR))
}

pub fn get_cache_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => match std::env::var("XDG_CACHE_HOME") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => home()?.join(".cache"),
        },
        "macos" => home()?.join("Library/Caches"),
        _ => dirs::cache_dir().ok_or(OutfitError::DirectoryNotFound { kind: "cache" })?,
    };

    Ok(base.join(APP_DIR))
}
