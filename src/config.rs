use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config directory relative to the user config dir
const CONFIG_SUBDIR: &str = "rigcheck";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Rigcheck configuration
///
/// Every field is optional on disk; anything absent falls back to its
/// default, so an empty file and a missing file behave the same.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigcheckConfig {
    /// Storage settings
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the results data directory
    pub data_dir: Option<PathBuf>,
}

impl RigcheckConfig {
    /// Default config path under the user config dir
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_SUBDIR)
            .join(CONFIG_FILE)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration if the file exists
    ///
    /// A missing file is not an error; a present but malformed file is.
    pub fn load_optional(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(Self::load(path)?))
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
