//! engine::flatten
//!
//! The flattening engine.
//!
//! # Algorithm
//!
//! For the head entity of a chain:
//!
//! 1. Fail with `MissingDocstring` if it has no fragment
//! 2. Normalize the fragment into lines
//! 3. Copy ordinary lines through, right-trimmed, each followed by `\n`
//! 4. For a directive line, reject a dangling argument up front, then for
//!    each reference: resolve it against the directive's own chain, flatten
//!    the result recursively, append it, and pad the output to end in a
//!    blank line
//!
//! # Invariants
//!
//! - Every inlined block is followed by exactly one blank line
//! - References in one directive are resolved independently
//! - An entity never expands inside its own expansion (`CyclicReference`)
//! - Nesting never exceeds `max_depth` (`DepthExceeded`)

use std::rc::Rc;

use tracing::{debug, trace};

use super::error::FlattenError;
use super::resolve::resolve;
use crate::core::chain::ContextChain;
use crate::core::directive::Directive;
use crate::core::docstring;
use crate::core::entity::EntityRef;
use crate::core::reference::{ReferenceError, ReferencePath};
use crate::loader::Namespace;

/// Default limit on include nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tunables for a flattening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Maximum number of nested includes below the top-level entity.
    pub max_depth: usize,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Output of a flattening run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flattened {
    /// The flattened document.
    pub document: String,
    /// Number of include references spliced in, at any depth.
    pub includes: usize,
}

/// Flattens fragments against a namespace.
#[derive(Debug)]
pub struct Flattener<'ns> {
    namespace: &'ns Namespace,
    options: FlattenOptions,
}

/// State carried through one recursive expansion.
#[derive(Default)]
struct Expansion {
    /// Entities currently being expanded, outermost first.
    active: Vec<EntityRef>,
    includes: usize,
}

impl<'ns> Flattener<'ns> {
    pub fn new(namespace: &'ns Namespace) -> Self {
        Self::with_options(namespace, FlattenOptions::default())
    }

    pub fn with_options(namespace: &'ns Namespace, options: FlattenOptions) -> Self {
        Self { namespace, options }
    }

    /// Flatten the head of `chain`.
    ///
    /// # Errors
    ///
    /// Any `FlattenError`; the first one aborts the run.
    pub fn flatten(&self, chain: &ContextChain) -> Result<String, FlattenError> {
        self.run(chain).map(|flattened| flattened.document)
    }

    /// Flatten the head of `chain`, also reporting how many includes were spliced.
    pub fn run(&self, chain: &ContextChain) -> Result<Flattened, FlattenError> {
        let mut expansion = Expansion::default();
        let document = self.expand(chain, &mut expansion)?;
        Ok(Flattened {
            document,
            includes: expansion.includes,
        })
    }

    fn expand(&self, chain: &ContextChain, expansion: &mut Expansion) -> Result<String, FlattenError> {
        let entity = chain.head();

        if let Some(start) = expansion.active.iter().position(|e| Rc::ptr_eq(e, entity)) {
            let mut cycle: Vec<String> = expansion.active[start..]
                .iter()
                .map(|e| e.qualified_name().to_string())
                .collect();
            cycle.push(entity.qualified_name().to_string());
            return Err(FlattenError::CyclicReference { cycle });
        }
        if expansion.active.len() > self.options.max_depth {
            return Err(FlattenError::DepthExceeded {
                entity: entity.qualified_name().to_string(),
                limit: self.options.max_depth,
            });
        }

        let raw = entity.doc().ok_or_else(|| FlattenError::MissingDocstring {
            name: entity.qualified_name().to_string(),
        })?;

        debug!(entity = entity.qualified_name(), depth = expansion.active.len(), "flattening");
        expansion.active.push(entity.clone());

        let mut doc = String::new();
        for line in docstring::clean(raw) {
            let line = line.trim_end();
            let Some(directive) = Directive::parse(line) else {
                doc.push_str(line);
                doc.push('\n');
                continue;
            };

            if directive.is_dangling() {
                return Err(FlattenError::DanglingReference {
                    entity: entity.qualified_name().to_string(),
                    reference: directive.argument().trim().to_string(),
                });
            }

            for reference in directive.references() {
                let path = ReferencePath::parse(reference).map_err(|e| match e {
                    ReferenceError::TrailingDot(reference) => FlattenError::DanglingReference {
                        entity: entity.qualified_name().to_string(),
                        reference,
                    },
                })?;
                let resolved = resolve(&path, chain, self.namespace)?;
                let included = self.expand(&resolved, expansion)?;
                trace!(reference, bytes = included.len(), "splicing include");
                doc.push_str(&included);
                ensure_blank_line(&mut doc);
                expansion.includes += 1;
            }
        }

        expansion.active.pop();
        Ok(doc)
    }
}

/// Pad `doc` with newlines until it ends in a blank line.
///
/// Padding a document that already ends in `\n\n` is a no-op.
///
/// # Example
///
/// ```
/// use flatdoc::engine::ensure_blank_line;
///
/// let mut doc = String::from("- X -\n");
/// ensure_blank_line(&mut doc);
/// assert_eq!(doc, "- X -\n\n");
///
/// ensure_blank_line(&mut doc);
/// assert_eq!(doc, "- X -\n\n");
/// ```
pub fn ensure_blank_line(doc: &mut String) {
    while !doc.ends_with("\n\n") {
        doc.push('\n');
    }
}
