//! core::manifest
//!
//! Stored form of a documented module.
//!
//! # Format
//!
//! A module manifest carries the module's own fragment and a table of
//! members. Members are classes, functions or methods; each may carry its
//! own fragment and nested members. Submodules are never listed here: they
//! live in their own manifests and are loaded on demand.
//!
//! ```toml
//! doc = """
//! # Foo
//!
//! !INCLUDE Bar, func
//! """
//!
//! [members.Bar]
//! kind = "class"
//! doc = "## Bar\n\n!INCLUDE baz"
//!
//! [members.Bar.members.baz]
//! kind = "method"
//! doc = "### baz()"
//!
//! [members.func]
//! kind = "function"
//! doc = "## func()"
//! ```
//!
//! The same structure is accepted as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::naming::is_identifier;

/// Errors from decoding a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid member name '{0}'")]
    InvalidMemberName(String),
}

/// Kinds of entity a manifest may declare as a member.
///
/// Modules are deliberately absent: they only come from the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Class,
    Function,
    Method,
}

/// A module as stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleManifest {
    /// The module's raw fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    /// Statically known members.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub members: BTreeMap<String, MemberManifest>,
}

/// A class, function or method as stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MemberManifest {
    pub kind: MemberKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub members: BTreeMap<String, MemberManifest>,
}

impl MemberManifest {
    /// Create a member with a fragment and no members.
    pub fn new(kind: MemberKind, doc: impl Into<String>) -> Self {
        Self {
            kind,
            doc: Some(doc.into()),
            members: BTreeMap::new(),
        }
    }

    /// Create a member without a fragment.
    pub fn undocumented(kind: MemberKind) -> Self {
        Self {
            kind,
            doc: None,
            members: BTreeMap::new(),
        }
    }

    /// Add a nested member.
    pub fn with_member(mut self, name: impl Into<String>, member: MemberManifest) -> Self {
        self.members.insert(name.into(), member);
        self
    }
}

impl ModuleManifest {
    /// Create a module manifest with a fragment.
    pub fn new(doc: impl Into<String>) -> Self {
        Self {
            doc: Some(doc.into()),
            members: BTreeMap::new(),
        }
    }

    /// Add a member.
    pub fn with_member(mut self, name: impl Into<String>, member: MemberManifest) -> Self {
        self.members.insert(name.into(), member);
        self
    }

    /// Decode and validate a TOML manifest.
    pub fn from_toml(contents: &str) -> Result<Self, ManifestError> {
        let manifest: Self = toml::from_str(contents)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Decode and validate a JSON manifest.
    pub fn from_json(contents: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(contents)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check that every member name, at any depth, is an identifier.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::InvalidMemberName` for the first offender.
    pub fn validate(&self) -> Result<(), ManifestError> {
        validate_members(&self.members)
    }
}

fn validate_members(members: &BTreeMap<String, MemberManifest>) -> Result<(), ManifestError> {
    for (name, member) in members {
        if !is_identifier(name) {
            return Err(ManifestError::InvalidMemberName(name.clone()));
        }
        validate_members(&member.members)?;
    }
    Ok(())
}
