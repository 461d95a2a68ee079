//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `--config <FILE>` if given
//! 2. `$FLATDOC_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/flatdoc/config.toml`
//! 4. `~/.flatdoc/config.toml`
//!
//! # Project Config
//!
//! Located at `flatdoc.toml` in the working directory (canonical), or
//! `.flatdoc/config.toml` (compatibility).
//!
//! # Validation
//!
//! Config values are validated after parsing: `max_depth` must be at least 1
//! and roots must be non-empty paths.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Contents of a config file, global or project scope.
///
/// # Example
///
/// ```toml
/// roots = ["docs", "../shared"]
/// max_depth = 32
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Directories searched for module manifests, in order
    pub roots: Option<Vec<PathBuf>>,

    /// Maximum include nesting
    pub max_depth: Option<usize>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(depth) = self.max_depth {
            if depth == 0 {
                return Err(ConfigError::InvalidValue(
                    "max_depth must be at least 1".to_string(),
                ));
            }
        }

        if let Some(roots) = &self.roots {
            if roots.iter().any(|root| root.as_os_str().is_empty()) {
                return Err(ConfigError::InvalidValue(
                    "roots cannot contain an empty path".to_string(),
                ));
            }
        }

        Ok(())
    }
}
