//! loader
//!
//! Module loading: where documented modules come from.
//!
//! # Architecture
//!
//! Manifests are produced through the [`ModuleLoader`] trait, which has
//! two implementations:
//!
//! - [`FsLoader`]: reads TOML/JSON manifests from a directory tree (default)
//! - [`MemoryLoader`]: holds manifests in memory, for tests
//!
//! The [`Namespace`] sits on top of a loader. It materializes manifests into
//! entities, caches them for the rest of the run, and records submodules on
//! their parents as they are loaded on demand.
//!
//! # Example
//!
//! ```
//! use flatdoc::loader::{MemoryLoader, Namespace};
//!
//! let ns = Namespace::new(MemoryLoader::new().with_toml("pkg", "doc = \"Pkg\""));
//! let pkg = ns.import("pkg").unwrap();
//! assert_eq!(pkg.doc(), Some("Pkg"));
//! ```

mod fs_loader;
mod memory;
mod namespace;
mod traits;

pub use fs_loader::FsLoader;
pub use memory::MemoryLoader;
pub use namespace::Namespace;
pub use traits::{validate_module_name, ImportError, ModuleLoader};
