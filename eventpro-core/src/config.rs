//! Global EventPro configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_STORAGE_KEY};
use crate::error::{EventProError, EventProResult};
use crate::format::is_valid_date_format;
use crate::store::FileStore;

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("eventpro"))
        .unwrap_or_else(|| PathBuf::from("~/.eventpro"))
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Configuration at ~/.config/eventpro/config.toml
///
/// Any key can be overridden with an `EVENTPRO_`-prefixed environment
/// variable, e.g. `EVENTPRO_DATA_DIR`.
#[derive(Debug, Deserialize, Clone)]
pub struct EventProConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for EventProConfig {
    fn default() -> Self {
        EventProConfig {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            date_format: default_date_format(),
        }
    }
}

impl EventProConfig {
    pub fn config_path() -> EventProResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventProError::Config("Could not determine config directory".into()))?
            .join("eventpro");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> EventProResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path` (if it exists) layered under the environment.
    pub fn load_from(path: &Path) -> EventProResult<Self> {
        let config: EventProConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("EVENTPRO"))
            .build()
            .map_err(|e| EventProError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventProError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> EventProResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(EventProError::Config("storage_key must not be empty".into()));
        }

        if !is_valid_date_format(&self.date_format) {
            return Err(EventProError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }

        Ok(())
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// The file store events are persisted in.
    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_path())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventProResult<()> {
        let contents = format!(
            "\
# EventPro configuration

# Where events are stored:
# data_dir = \"{}\"

# Storage key holding the event list:
# storage_key = \"{}\"

# strftime pattern for event dates:
# date_format = \"{}\"
",
            default_data_dir().display(),
            DEFAULT_STORAGE_KEY,
            DEFAULT_DATE_FORMAT,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventProError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventProError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
