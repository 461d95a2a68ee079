//! loader::fs_loader
//!
//! Filesystem-backed module loader.
//!
//! # Layout
//!
//! Modules are laid out like a package tree under one or more roots. The
//! module `a.b.c` is looked up in each root, in order, at:
//!
//! 1. `a/b/c.toml`
//! 2. `a/b/c.json`
//! 3. `a/b/c/mod.toml`
//! 4. `a/b/c/mod.json`
//!
//! The first existing file wins. A package directory may hold both its own
//! `mod.toml` and submodule manifests.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::traits::{ImportError, ModuleLoader};
use crate::core::manifest::ModuleManifest;

/// Manifest file name for a package directory.
const PACKAGE_STEM: &str = "mod";

/// Supported manifest encodings, in lookup order.
const EXTENSIONS: [&str; 2] = ["toml", "json"];

/// Loads module manifests from directories on disk.
///
/// # Example
///
/// ```no_run
/// use flatdoc::loader::{FsLoader, ModuleLoader};
/// use std::path::PathBuf;
///
/// let loader = FsLoader::new(vec![PathBuf::from("docs")]);
/// let manifest = loader.load("mypkg.core").unwrap();
/// println!("{:?}", manifest.doc);
/// ```
#[derive(Debug, Clone)]
pub struct FsLoader {
    /// Search roots, in priority order
    roots: Vec<PathBuf>,
}

impl FsLoader {
    /// Create a loader over the given roots.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Every path that would be tried for `name`, in order.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let segments: Vec<&str> = name.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return Vec::new();
        };

        let mut paths = Vec::new();
        for root in &self.roots {
            let dir = parents.iter().fold(root.clone(), |dir, seg| dir.join(seg));
            for ext in EXTENSIONS {
                paths.push(dir.join(format!("{last}.{ext}")));
            }
            for ext in EXTENSIONS {
                paths.push(dir.join(last).join(format!("{PACKAGE_STEM}.{ext}")));
            }
        }
        paths
    }
}

impl ModuleLoader for FsLoader {
    fn load(&self, name: &str) -> Result<ModuleManifest, ImportError> {
        let candidates = self.candidates(name);
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => {
                debug!(module = name, path = %path.display(), "reading manifest");
                read_manifest(name, path)
            }
            None => Err(ImportError::NotFound {
                name: name.to_string(),
                searched: candidates,
            }),
        }
    }
}

/// Read and decode one manifest file, choosing the format by extension.
fn read_manifest(name: &str, path: &Path) -> Result<ModuleManifest, ImportError> {
    let contents = fs::read_to_string(path).map_err(|e| ImportError::Read {
        name: name.to_string(),
        path: path.to_path_buf(),
        source: e,
    })?;

    let decoded = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => ModuleManifest::from_json(&contents),
        _ => ModuleManifest::from_toml(&contents),
    };

    decoded.map_err(|e| ImportError::Parse {
        name: name.to_string(),
        origin: path.display().to_string(),
        source: e,
    })
}
