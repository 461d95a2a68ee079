//! engine
//!
//! Reference resolution and flattening.
//!
//! # Architecture
//!
//! The engine has two parts, the second built on the first:
//!
//! 1. **Resolve** ([`resolve`]): interpret a reference path against a
//!    context chain, loading submodules on demand
//! 2. **Flatten** ([`Flattener`]): scan a fragment, resolve each include,
//!    recursively flatten it, and splice the result
//!
//! # Invariants
//!
//! - The engine is stateless across runs; no documents are cached
//! - The first error anywhere in the expansion aborts the run
//!
//! # Example
//!
//! ```
//! use flatdoc::engine::flatdoc;
//! use flatdoc::loader::{MemoryLoader, Namespace};
//!
//! let ns = Namespace::new(MemoryLoader::new().with_toml(
//!     "t",
//!     "doc = \"T\\n\\n!INCLUDE X\"\n[members.X]\nkind = \"function\"\ndoc = \"- X -\"",
//! ));
//! assert_eq!(flatdoc("t", &ns).unwrap(), "T\n\n- X -\n\n");
//! ```

pub mod error;
pub mod flatten;
pub mod resolve;

pub use error::FlattenError;
pub use flatten::{ensure_blank_line, FlattenOptions, Flattened, Flattener, DEFAULT_MAX_DEPTH};
pub use resolve::resolve;

use crate::core::chain::ContextChain;
use crate::loader::Namespace;

/// Flatten the documentation of the top-level module `name`.
///
/// # Errors
///
/// Any `FlattenError`, including the import failure of `name` itself.
pub fn flatdoc(name: &str, namespace: &Namespace) -> Result<String, FlattenError> {
    flatdoc_with_options(name, namespace, FlattenOptions::default()).map(|f| f.document)
}

/// Like [`flatdoc`], with explicit options and the include count.
pub fn flatdoc_with_options(
    name: &str,
    namespace: &Namespace,
    options: FlattenOptions,
) -> Result<Flattened, FlattenError> {
    let module = namespace.import(name)?;
    let chain = ContextChain::new(module);
    Flattener::with_options(namespace, options).run(&chain)
}
