//! Configuration management and validation.
//!
//! Provides the import settings that are not part of the fixed file layout:
//! the defaults stamped on every imported vehicle and an optional row limit.
//! Settings are layered: defaults, then a JSON config file, then environment
//! variables, then explicit overrides from the command line.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DELIVERY_TIME, DEFAULT_PASSENGER_CAPACITY, env_vars,
};
use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for a vehicle CSV import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Delivery time shown on every imported listing
    pub delivery_time: String,

    /// Passenger capacity assigned to every imported vehicle
    pub passenger_capacity: u32,

    /// Maximum number of data rows accepted in one file (None = unlimited)
    pub max_rows: Option<usize>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delivery_time: DEFAULT_DELIVERY_TIME.to_string(),
            passenger_capacity: DEFAULT_PASSENGER_CAPACITY,
            max_rows: None,
        }
    }
}

impl ImportConfig {
    pub fn with_delivery_time(mut self, delivery_time: impl Into<String>) -> Self {
        self.delivery_time = delivery_time.into();
        self
    }

    pub fn with_passenger_capacity(mut self, capacity: u32) -> Self {
        self.passenger_capacity = capacity;
        self
    }

    /// Limit the number of data rows accepted per file
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Default config file location (`<config_dir>/vehicle-csv-import/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| ImportError::configuration("Could not determine user config directory"))
    }

    /// Load settings from a JSON file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ImportError::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ImportError::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Apply environment overrides using the given lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env_vars::DELIVERY_TIME) {
            self.delivery_time = value;
        }

        if let Some(value) = lookup(env_vars::PASSENGER_CAPACITY) {
            self.passenger_capacity = value.trim().parse().map_err(|_| {
                ImportError::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    env_vars::PASSENGER_CAPACITY,
                    value
                ))
            })?;
        }

        if let Some(value) = lookup(env_vars::MAX_ROWS) {
            self.max_rows = Some(value.trim().parse().map_err(|_| {
                ImportError::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    env_vars::MAX_ROWS,
                    value
                ))
            })?);
        }

        Ok(())
    }

    /// Load with layered configuration (defaults -> file -> environment)
    ///
    /// When `config_file` is None the default location is used if it exists.
    /// Values are not validated here; callers layer their own overrides first.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        Self::load_layered_with(config_file, |key| std::env::var(key).ok())
    }

    /// Layered load with an explicit environment lookup
    pub fn load_layered_with<F>(config_file: Option<&Path>, env_lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_path = Self::default_config_path().ok();
        let file = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ImportError::file_not_found(path));
                }
                Some(path)
            }
            None => default_path.as_deref().filter(|path| path.exists()),
        };

        let mut config = match file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_from(env_lookup)?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.delivery_time.trim().is_empty() {
            return Err(ImportError::configuration("delivery_time cannot be empty"));
        }

        if self.passenger_capacity == 0 {
            return Err(ImportError::configuration(
                "passenger_capacity must be greater than 0",
            ));
        }

        if self.max_rows == Some(0) {
            return Err(ImportError::configuration(
                "max_rows must be greater than 0 when set",
            ));
        }

        Ok(())
    }
}
