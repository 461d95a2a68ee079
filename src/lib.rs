//! flatdoc - Flat documentation from documented module trees
//!
//! flatdoc assembles one flattened document from the docstrings attached to
//! a tree of modules, classes, functions and methods. A docstring line of
//! the form `!INCLUDE a, .b, ..c.d` inlines the referenced docstrings at
//! that point, recursively.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Reference resolution and flattening
//! - [`core`] - Domain types: entities, chains, reference paths, config
//! - [`loader`] - Where modules come from, and the per-run module registry
//! - [`ui`] - User-facing output
//!
//! # Example
//!
//! ```
//! use flatdoc::engine::flatdoc;
//! use flatdoc::loader::{MemoryLoader, Namespace};
//!
//! let loader = MemoryLoader::new().with_toml(
//!     "foo",
//!     r#"
//! doc = """
//! Foo
//!
//! !INCLUDE Bar
//! """
//!
//! [members.Bar]
//! kind = "class"
//! doc = "Bar"
//! "#,
//! );
//! let ns = Namespace::new(loader);
//! assert_eq!(flatdoc("foo", &ns).unwrap(), "Foo\n\nBar\n\n");
//! ```

pub mod cli;
pub mod core;
pub mod engine;
pub mod loader;
pub mod ui;
