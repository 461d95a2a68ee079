//! loader::namespace
//!
//! Per-run registry of materialized modules.
//!
//! The namespace wraps a [`ModuleLoader`] and remembers every module it has
//! materialized, keyed by qualified name. A module reached through two
//! different references is loaded once and shared. Nothing survives the
//! namespace: build a fresh one for each run.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::debug;

use super::traits::{validate_module_name, ImportError, ModuleLoader};
use crate::core::entity::{Entity, EntityRef};
use crate::core::naming::qualify;

/// Module registry backed by a loader.
pub struct Namespace {
    loader: Box<dyn ModuleLoader>,
    modules: RefCell<HashMap<String, EntityRef>>,
}

impl Namespace {
    pub fn new(loader: impl ModuleLoader + 'static) -> Self {
        Self::from_boxed(Box::new(loader))
    }

    pub fn from_boxed(loader: Box<dyn ModuleLoader>) -> Self {
        Self {
            loader,
            modules: RefCell::new(HashMap::new()),
        }
    }

    /// Return the module named `name`, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::InvalidName` for malformed names, otherwise
    /// whatever the loader reports.
    pub fn import(&self, name: &str) -> Result<EntityRef, ImportError> {
        let cached = self.modules.borrow().get(name).cloned();
        if let Some(module) = cached {
            return Ok(module);
        }

        validate_module_name(name)?;
        debug!(module = name, "loading module");
        let manifest = self.loader.load(name)?;
        let module = Entity::from_manifest(name, manifest);
        self.modules
            .borrow_mut()
            .insert(name.to_string(), module.clone());
        Ok(module)
    }

    /// Load the submodule `child` of `parent` and record it on the parent.
    ///
    /// # Errors
    ///
    /// Propagates the `ImportError` for the qualified child name.
    pub fn load_child(&self, parent: &Entity, child: &str) -> Result<EntityRef, ImportError> {
        let name = qualify(parent.qualified_name(), child);
        let module = self.import(&name)?;
        parent.record_submodule(child, module.clone());
        Ok(module)
    }

    /// Qualified names of every module materialized so far, sorted.
    pub fn loaded(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Namespace")
            .field("loaded", &self.loaded())
            .finish_non_exhaustive()
    }
}
