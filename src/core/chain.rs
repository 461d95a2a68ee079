//! core::chain
//!
//! The context chain: the entity being processed and its ancestors.
//!
//! # Invariants
//!
//! - The chain is never empty. The head is stored apart from the ancestors
//!   so an empty chain cannot be represented; [`ContextChain::pop`] refuses
//!   to remove the last entity.

use std::iter;

use thiserror::Error;

use super::entity::EntityRef;

/// Errors from chain operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("cannot step above top-level entity '{0}'")]
    AboveRoot(String),
}

/// Ordered chain of enclosing entities, innermost first.
#[derive(Debug, Clone)]
pub struct ContextChain {
    head: EntityRef,
    /// Outermost first, so the nearest ancestor is at the end.
    ancestors: Vec<EntityRef>,
}

impl ContextChain {
    /// Create a one-element chain.
    pub fn new(root: EntityRef) -> Self {
        Self {
            head: root,
            ancestors: Vec::new(),
        }
    }

    /// The innermost entity.
    pub fn head(&self) -> &EntityRef {
        &self.head
    }

    /// Make `entity` the new head.
    pub fn push(&mut self, entity: EntityRef) {
        let previous = std::mem::replace(&mut self.head, entity);
        self.ancestors.push(previous);
    }

    /// Remove the head, making its parent the new head.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::AboveRoot` if the head is the last entity.
    pub fn pop(&mut self) -> Result<EntityRef, ChainError> {
        let parent = self
            .ancestors
            .pop()
            .ok_or_else(|| ChainError::AboveRoot(self.head.qualified_name().to_string()))?;
        Ok(std::mem::replace(&mut self.head, parent))
    }

    /// Iterate from head to root.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRef> {
        iter::once(&self.head).chain(self.ancestors.iter().rev())
    }

    /// Qualified names from head to root.
    pub fn qualified_names(&self) -> Vec<&str> {
        self.iter().map(|e| e.qualified_name()).collect()
    }
}
