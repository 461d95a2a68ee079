//! engine::resolve
//!
//! The entity resolver.
//!
//! # Algorithm
//!
//! Segments are consumed left to right against a working copy of the
//! context chain:
//!
//! - `Up` pops the head; popping the last entity is `OutOfRange`
//! - `Name(s)` pushes the head's member `s` if it has one; otherwise a
//!   module loads submodule `s` on demand, and anything else fails with
//!   `UnknownMember`
//!
//! The head of the final chain is the resolved entity. The whole chain is
//! returned so that references inside the included fragment resolve against
//! its real ancestry.
//!
//! # Invariants
//!
//! - The caller's chain is never modified; every reference starts from it
//! - Import failures propagate unchanged

use tracing::debug;

use super::error::FlattenError;
use crate::core::chain::ContextChain;
use crate::core::naming::qualify;
use crate::core::reference::{ReferencePath, Segment};
use crate::loader::Namespace;

/// Resolve `path` relative to `context`.
///
/// # Example
///
/// ```
/// use flatdoc::core::chain::ContextChain;
/// use flatdoc::core::reference::ReferencePath;
/// use flatdoc::engine::resolve;
/// use flatdoc::loader::{MemoryLoader, Namespace};
///
/// let ns = Namespace::new(MemoryLoader::new().with_toml(
///     "foo",
///     "[members.Bar]\nkind = \"class\"\n[members.Bar.members.baz]\nkind = \"method\"",
/// ));
/// let chain = ContextChain::new(ns.import("foo").unwrap());
///
/// let path = ReferencePath::parse("Bar.baz").unwrap();
/// let resolved = resolve(&path, &chain, &ns).unwrap();
/// assert_eq!(resolved.qualified_names(), vec!["foo.Bar.baz", "foo.Bar", "foo"]);
/// ```
///
/// # Errors
///
/// `OutOfRange`, `UnknownMember`, or `UnresolvedImport`.
pub fn resolve(
    path: &ReferencePath,
    context: &ContextChain,
    namespace: &Namespace,
) -> Result<ContextChain, FlattenError> {
    let mut chain = context.clone();

    for segment in path.segments() {
        match segment {
            Segment::Up => {
                chain.pop().map_err(|_| FlattenError::OutOfRange {
                    entity: context.head().qualified_name().to_string(),
                    reference: path.as_str().to_string(),
                })?;
            }
            Segment::Name(name) => {
                let current = chain.head().clone();
                let next = match current.member(name) {
                    Some(member) => member,
                    None if current.supports_lazy_load() => {
                        namespace.load_child(&current, name)?
                    }
                    None => {
                        return Err(FlattenError::UnknownMember {
                            name: qualify(current.qualified_name(), name),
                            entity: context.head().qualified_name().to_string(),
                            reference: path.as_str().to_string(),
                        });
                    }
                };
                chain.push(next);
            }
        }
    }

    debug!(
        reference = path.as_str(),
        from = context.head().qualified_name(),
        to = chain.head().qualified_name(),
        "resolved include"
    );
    Ok(chain)
}
