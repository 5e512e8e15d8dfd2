use crate::error::{PromptError, Result};
use crate::render::DEFAULT_PREVIEW_CHARS;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for promptpad, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Key the prompt collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Maximum characters of content shown in list previews
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            preview_chars: default_preview_chars(),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PromptError::Io)?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(PromptError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PromptError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PromptError::Serialization)?;
        fs::write(config_path, content).map_err(PromptError::Io)?;
        Ok(())
    }
}
