//! Layout engine settings
//!
//! Settings are plain serde structs. Every field has a default, so a TOML
//! file only needs to name what it overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::split::Orientation;

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be written.
    #[error("failed to write settings to {path}: {source}")]
    Write {
        /// File that was written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML could not be parsed into settings.
    #[error("failed to parse settings: {0}")]
    Parse(String),

    /// The settings could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(String),

    /// `max_depth` must allow at least one level of nesting.
    #[error("invalid max_depth: {0} (must be at least 1)")]
    InvalidMaxDepth(usize),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for a view controller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Maximum depth of a nested split (None = unlimited).
    ///
    /// Drops that would nest deeper are silently refused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Orientation of the root split.
    pub root_orientation: Orientation,
}

impl LayoutSettings {
    /// Creates settings with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets the root orientation.
    #[must_use]
    pub const fn with_root_orientation(mut self, orientation: Orientation) -> Self {
        self.root_orientation = orientation;
        self
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMaxDepth` if `max_depth` is zero.
    pub fn validate(&self) -> ConfigResult<()> {
        match self.max_depth {
            Some(0) => Err(ConfigError::InvalidMaxDepth(0)),
            _ => Ok(()),
        }
    }

    /// Parses and validates settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and the errors of
    /// [`LayoutSettings::validate`].
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let settings: Self =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes the settings to TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read, plus the
    /// errors of [`LayoutSettings::from_toml_str`].
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded layout settings");
        Ok(settings)
    }

    /// Saves settings to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` or `ConfigError::Write`.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let contents = self.to_toml_string()?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
