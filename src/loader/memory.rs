//! loader::memory
//!
//! In-memory module loader for deterministic testing.
//!
//! # Design
//!
//! Manifests are registered up front. Every load request is recorded, so
//! tests can assert which modules were (and were not) loaded on demand.
//! Clones share state, so a test can keep a handle after giving one to a
//! [`Namespace`](super::Namespace).
//!
//! # Example
//!
//! ```
//! use flatdoc::loader::{MemoryLoader, ModuleLoader};
//!
//! let loader = MemoryLoader::new().with_toml("foo", "doc = \"Foo\"");
//! let manifest = loader.load("foo").unwrap();
//! assert_eq!(manifest.doc.as_deref(), Some("Foo"));
//! assert_eq!(loader.requests(), vec!["foo".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::traits::{ImportError, ModuleLoader};
use crate::core::manifest::ModuleManifest;

/// Mock loader holding manifests in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    inner: Rc<RefCell<MemoryLoaderInner>>,
}

#[derive(Debug)]
enum Stored {
    Manifest(ModuleManifest),
    /// Decoded on every load, like a file would be.
    Toml(String),
}

#[derive(Debug, Default)]
struct MemoryLoaderInner {
    modules: HashMap<String, Stored>,
    requests: Vec<String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a manifest.
    pub fn insert(&self, name: impl Into<String>, manifest: ModuleManifest) {
        self.inner
            .borrow_mut()
            .modules
            .insert(name.into(), Stored::Manifest(manifest));
    }

    /// Register a manifest, builder style.
    pub fn with_module(self, name: impl Into<String>, manifest: ModuleManifest) -> Self {
        self.insert(name, manifest);
        self
    }

    /// Register a manifest given as TOML text.
    ///
    /// Invalid TOML is kept and reported as `ImportError::Parse` on load.
    pub fn with_toml(self, name: impl Into<String>, toml: &str) -> Self {
        self.inner
            .borrow_mut()
            .modules
            .insert(name.into(), Stored::Toml(toml.to_string()));
        self
    }

    /// Every name requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.inner.borrow().requests.clone()
    }

    /// How many times `name` was requested.
    pub fn request_count(&self, name: &str) -> usize {
        self.inner
            .borrow()
            .requests
            .iter()
            .filter(|r| r.as_str() == name)
            .count()
    }
}

impl ModuleLoader for MemoryLoader {
    fn load(&self, name: &str) -> Result<ModuleManifest, ImportError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(name.to_string());

        match inner.modules.get(name) {
            Some(Stored::Manifest(manifest)) => Ok(manifest.clone()),
            Some(Stored::Toml(toml)) => {
                ModuleManifest::from_toml(toml).map_err(|e| ImportError::Parse {
                    name: name.to_string(),
                    origin: "<memory>".to_string(),
                    source: e,
                })
            }
            None => Err(ImportError::NotFound {
                name: name.to_string(),
                searched: Vec::new(),
            }),
        }
    }
}
