//! loader::traits
//!
//! Module loader trait definition.
//!
//! # Design
//!
//! The `ModuleLoader` trait turns a fully-qualified module name into its
//! stored manifest. It knows nothing about entities or chains; the
//! [`Namespace`](super::Namespace) materializes what a loader returns.
//!
//! # Example
//!
//! ```ignore
//! use flatdoc::loader::{ImportError, ModuleLoader};
//!
//! fn has_module(loader: &dyn ModuleLoader, name: &str) -> bool {
//!     !matches!(loader.load(name), Err(ImportError::NotFound { .. }))
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::core::manifest::{ManifestError, ModuleManifest};
use crate::core::naming::invalid_segment;

/// Errors from locating or reading a module.
#[derive(Debug, Error)]
pub enum ImportError {
    /// No loader location holds the module.
    #[error("no module named '{name}'")]
    NotFound { name: String, searched: Vec<PathBuf> },

    /// A segment of the name is not an identifier.
    #[error("invalid module name '{name}': '{segment}' is not an identifier")]
    InvalidName { name: String, segment: String },

    /// The manifest exists but could not be read.
    #[error("failed to read module '{name}' from '{path}': {source}")]
    Read {
        name: String,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest could not be decoded.
    #[error("failed to parse module '{name}' ({origin}): {source}")]
    Parse {
        name: String,
        origin: String,
        source: ManifestError,
    },
}

impl ImportError {
    /// The qualified name whose import failed.
    pub fn name(&self) -> &str {
        match self {
            ImportError::NotFound { name, .. }
            | ImportError::InvalidName { name, .. }
            | ImportError::Read { name, .. }
            | ImportError::Parse { name, .. } => name,
        }
    }
}

/// Source of module manifests.
pub trait ModuleLoader {
    /// Load the manifest of the module named `name` (fully qualified).
    ///
    /// # Errors
    ///
    /// Returns `ImportError::NotFound` if no such module exists, and the
    /// other variants if it exists but cannot be used.
    fn load(&self, name: &str) -> Result<ModuleManifest, ImportError>;
}

/// Reject qualified names with a segment that is not an identifier.
///
/// # Errors
///
/// Returns `ImportError::InvalidName` naming the first bad segment.
pub fn validate_module_name(name: &str) -> Result<(), ImportError> {
    match invalid_segment(name) {
        Some(segment) => Err(ImportError::InvalidName {
            name: name.to_string(),
            segment: segment.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        assert!(validate_module_name("pkg").is_ok());
        assert!(validate_module_name("pkg.sub_mod.leaf2").is_ok());
    }

    #[test]
    fn invalid_names_report_segment() {
        let err = validate_module_name("pkg.bad name").unwrap_err();
        match &err {
            ImportError::InvalidName { name, segment } => {
                assert_eq!(name, "pkg.bad name");
                assert_eq!(segment, "bad name");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.name(), "pkg.bad name");
    }

    #[test]
    fn empty_names_are_invalid() {
        assert!(validate_module_name("").is_err());
        assert!(validate_module_name("a..b").is_err());
    }
}
