use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{PwCryptError, Result};

/// User configuration, loaded from `.pwcrypt.toml`.
///
/// Every field has a default so pwcrypt works without any config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log filter directive used when `PWCRYPT_LOG` is unset (e.g. "warn").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether terminal output may be colored.
    #[serde(default = "default_color")]
    pub color: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_color() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            color: default_color(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in a directory.
    pub const FILE_NAME: &'static str = ".pwcrypt.toml";

    /// Load settings from `<dir>/.pwcrypt.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(&config_path)
    }

    /// Load settings from an explicit file, which must exist.
    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PwCryptError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            PwCryptError::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────
