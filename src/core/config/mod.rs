//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! flatdoc has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Settings next to the documented tree
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. The explicit `--config` path, if given (must exist)
//! 2. `$FLATDOC_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/flatdoc/config.toml`
//! 4. `~/.flatdoc/config.toml`
//!
//! # Project Config Locations
//!
//! Searched in order:
//! 1. `flatdoc.toml` (canonical)
//! 2. `.flatdoc/config.toml` (compatibility, warns)
//!
//! # Example
//!
//! ```no_run
//! use flatdoc::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(None, Path::new("/path/to/project")).unwrap();
//! let config = result.config;
//!
//! for root in config.roots() {
//!     println!("searching {}", root.display());
//! }
//! ```

pub mod schema;

pub use schema::ConfigFile;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Canonical project config file name.
pub const PROJECT_CONFIG_FILE: &str = "flatdoc.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence rules: project config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: ConfigFile,
    /// Project configuration (if found)
    pub project: Option<ConfigFile>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
    /// Directory the project config was looked up in
    project_dir: PathBuf,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed, or if
    /// `explicit` is given and cannot be read. Missing config files are not
    /// an error (defaults are used).
    pub fn load(explicit: Option<&Path>, project_dir: &Path) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (global, global_path) = Self::load_global(explicit)?;
        let (project, project_path) = Self::load_project(project_dir, &mut warnings)?;

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                project,
                global_path,
                project_path,
                project_dir: project_dir.to_path_buf(),
            },
            warnings,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global(explicit: Option<&Path>) -> Result<(ConfigFile, Option<PathBuf>), ConfigError> {
        // 1. Explicit path must exist
        if let Some(path) = explicit {
            let config = Self::read_config(path)?;
            return Ok((config, Some(path.to_path_buf())));
        }

        // 2. Check $FLATDOC_CONFIG
        if let Ok(path) = std::env::var("FLATDOC_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check $XDG_CONFIG_HOME/flatdoc/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("flatdoc/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 4. Check ~/.flatdoc/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".flatdoc/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((ConfigFile::default(), None))
    }

    /// Load project configuration from the project directory.
    fn load_project(
        project_dir: &Path,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(Option<ConfigFile>, Option<PathBuf>), ConfigError> {
        // 1. Check flatdoc.toml (canonical)
        let canonical = project_dir.join(PROJECT_CONFIG_FILE);
        if canonical.exists() {
            let config = Self::read_config(&canonical)?;
            return Ok((Some(config), Some(canonical)));
        }

        // 2. Check .flatdoc/config.toml (compatibility)
        let compat = project_dir.join(".flatdoc/config.toml");
        if compat.exists() {
            warnings.push(ConfigWarning {
                message: format!(
                    "Using deprecated config location. Please move to '{}'",
                    canonical.display()
                ),
                path: compat.clone(),
            });
            let config = Self::read_config(&compat)?;
            return Ok((Some(config), Some(compat)));
        }

        Ok((None, None))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Directories searched for module manifests.
    ///
    /// Relative entries resolve against the directory of the file that
    /// declared them. Defaults to the project directory itself.
    pub fn roots(&self) -> Vec<PathBuf> {
        if let Some(roots) = self.project.as_ref().and_then(|p| p.roots.as_ref()) {
            return Self::anchor(roots, self.project_path.as_deref(), &self.project_dir);
        }
        if let Some(roots) = self.global.roots.as_ref() {
            return Self::anchor(roots, self.global_path.as_deref(), &self.project_dir);
        }
        vec![self.project_dir.clone()]
    }

    /// Maximum include nesting, if configured.
    pub fn max_depth(&self) -> Option<usize> {
        self.project
            .as_ref()
            .and_then(|p| p.max_depth)
            .or(self.global.max_depth)
    }

    /// Path of the global config file, if one was loaded.
    pub fn global_path(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Path of the project config file, if one was loaded.
    pub fn project_path(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }

    fn anchor(roots: &[PathBuf], declared_in: Option<&Path>, fallback: &Path) -> Vec<PathBuf> {
        let base = declared_in.and_then(Path::parent).unwrap_or(fallback);
        roots
            .iter()
            .map(|root| {
                if root.is_absolute() {
                    root.clone()
                } else {
                    base.join(root)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Write an empty explicit global config so the environment is not consulted.
    fn empty_global(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("global.toml");
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn defaults_to_project_dir() {
        let dir = TempDir::new().unwrap();
        let global = empty_global(&dir);
        let result = Config::load(Some(&global), dir.path()).unwrap();

        assert_eq!(result.config.roots(), vec![dir.path().to_path_buf()]);
        assert_eq!(result.config.max_depth(), None);
        assert!(result.config.project_path().is_none());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn project_overrides_global() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        fs::write(&global, "roots = [\"/abs/global\"]\nmax_depth = 10").unwrap();
        let project = dir.path().join("project");
        fs::create_dir(&project).unwrap();
        fs::write(project.join(PROJECT_CONFIG_FILE), "roots = [\"docs\"]").unwrap();

        let config = Config::load(Some(&global), &project).unwrap().config;

        assert_eq!(config.roots(), vec![project.join("docs")]);
        assert_eq!(config.max_depth(), Some(10));
    }

    #[test]
    fn global_roots_anchor_to_global_file() {
        let dir = TempDir::new().unwrap();
        let conf_dir = dir.path().join("conf");
        fs::create_dir(&conf_dir).unwrap();
        let global = conf_dir.join("config.toml");
        fs::write(&global, "roots = [\"lib\", \"/abs\"]").unwrap();

        let config = Config::load(Some(&global), dir.path()).unwrap().config;

        assert_eq!(
            config.roots(),
            vec![conf_dir.join("lib"), PathBuf::from("/abs")]
        );
    }

    #[test]
    fn compat_location_warns() {
        let dir = TempDir::new().unwrap();
        let global = empty_global(&dir);
        fs::create_dir(dir.path().join(".flatdoc")).unwrap();
        fs::write(dir.path().join(".flatdoc/config.toml"), "max_depth = 3").unwrap();

        let result = Config::load(Some(&global), dir.path()).unwrap();

        assert_eq!(result.config.max_depth(), Some(3));
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("flatdoc.toml"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let global = empty_global(&dir);
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "max_depth = 0").unwrap();
        let err = Config::load(Some(&global), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let global = empty_global(&dir);
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "roots = 5").unwrap();
        let err = Config::load(Some(&global), dir.path()).unwrap_err();
        match err {
            ConfigError::ParseError { path, .. } => {
                assert!(path.ends_with(PROJECT_CONFIG_FILE))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
