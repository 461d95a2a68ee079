//! core::entity
//!
//! Documentation entities: modules, classes, functions and methods.
//!
//! # Capabilities
//!
//! Entities come in two capability variants, carried by [`Members`]:
//!
//! - **Container** (modules): a fixed member table plus a table of
//!   submodules recorded as they are loaded on demand.
//! - **Leaf** (classes, functions, methods): members fixed at construction,
//!   with no fallback.
//!
//! The resolver asks [`Entity::supports_lazy_load`] instead of inspecting
//! the kind, so the branch is a capability check.
//!
//! # Ownership
//!
//! Entities are shared through [`EntityRef`] and never copied. The only
//! mutation after construction is a module recording a loaded submodule.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::manifest::{MemberKind, MemberManifest, ModuleManifest};
use super::naming::{local_name, qualify};

/// Shared handle to an entity.
pub type EntityRef = Rc<Entity>;

/// The kind of code entity a fragment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Module,
    Class,
    Function,
    Method,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Module => "module",
            EntityKind::Class => "class",
            EntityKind::Function => "function",
            EntityKind::Method => "method",
        }
    }
}

impl From<MemberKind> for EntityKind {
    fn from(kind: MemberKind) -> Self {
        match kind {
            MemberKind::Class => EntityKind::Class,
            MemberKind::Function => EntityKind::Function,
            MemberKind::Method => EntityKind::Method,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member table of an entity.
#[derive(Debug)]
pub enum Members {
    /// Members fixed at construction.
    Leaf(BTreeMap<String, EntityRef>),
    /// Fixed members plus submodules loaded on demand.
    Container {
        fixed: BTreeMap<String, EntityRef>,
        loaded: RefCell<BTreeMap<String, EntityRef>>,
    },
}

/// An addressable documentation node.
#[derive(Debug)]
pub struct Entity {
    qualified_name: String,
    kind: EntityKind,
    doc: Option<String>,
    members: Members,
}

impl Entity {
    /// Create a module.
    pub fn module(
        qualified_name: impl Into<String>,
        doc: Option<String>,
        members: BTreeMap<String, EntityRef>,
    ) -> EntityRef {
        Rc::new(Self {
            qualified_name: qualified_name.into(),
            kind: EntityKind::Module,
            doc,
            members: Members::Container {
                fixed: members,
                loaded: RefCell::new(BTreeMap::new()),
            },
        })
    }

    /// Create a class, function or method.
    pub fn leaf(
        kind: MemberKind,
        qualified_name: impl Into<String>,
        doc: Option<String>,
        members: BTreeMap<String, EntityRef>,
    ) -> EntityRef {
        Rc::new(Self {
            qualified_name: qualified_name.into(),
            kind: kind.into(),
            doc,
            members: Members::Leaf(members),
        })
    }

    /// Materialize a module and all of its static members from a manifest.
    pub fn from_manifest(qualified_name: &str, manifest: ModuleManifest) -> EntityRef {
        let members = build_members(qualified_name, manifest.members);
        Self::module(qualified_name, manifest.doc, members)
    }

    /// Local identifier.
    pub fn name(&self) -> &str {
        local_name(&self.qualified_name)
    }

    /// Fully-qualified dotted name.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Raw, unnormalized fragment.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Look up a member by local name, including already-loaded submodules.
    pub fn member(&self, name: &str) -> Option<EntityRef> {
        match &self.members {
            Members::Leaf(members) => members.get(name).cloned(),
            Members::Container { fixed, loaded } => fixed
                .get(name)
                .cloned()
                .or_else(|| loaded.borrow().get(name).cloned()),
        }
    }

    /// Whether unknown members may be loaded on demand.
    pub fn supports_lazy_load(&self) -> bool {
        matches!(self.members, Members::Container { .. })
    }

    /// Record a submodule loaded on demand.
    ///
    /// Returns `false` (and records nothing) on a leaf entity.
    pub fn record_submodule(&self, name: &str, module: EntityRef) -> bool {
        match &self.members {
            Members::Leaf(_) => false,
            Members::Container { loaded, .. } => {
                loaded.borrow_mut().insert(name.to_string(), module);
                true
            }
        }
    }
}

fn build_members(
    parent: &str,
    members: BTreeMap<String, MemberManifest>,
) -> BTreeMap<String, EntityRef> {
    members
        .into_iter()
        .map(|(name, member)| {
            let qualified = qualify(parent, &name);
            let children = build_members(&qualified, member.members);
            let entity = Entity::leaf(member.kind, qualified, member.doc, children);
            (name, entity)
        })
        .collect()
}
