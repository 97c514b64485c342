use crate::core::error::{OutfitError, Result};
use crate::core::session::SessionOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub gender_scoping_enabled: bool,
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gender_scoping_enabled: false,
            catalog_path: None,
            created_at: chrono::Utc::now(),
        }
    }
}

impl AppConfig {
    pub fn load_or_create(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join(CONFIG_FILE);

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            serde_json::from_str(&content)
                .map_err(|e| OutfitError::config_parse_failed(&config_file, e))
        } else {
            log::debug!("Creating default config at {}", config_file.display());
            let config = Self::default();
            config.save(config_dir)?;
            Ok(config)
        }
    }

    pub fn save(&self, config_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(config_dir)?;

        let config_file = config_dir.join(CONFIG_FILE);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            gender_scoping_enabled: self.gender_scoping_enabled,
        }
    }
}
