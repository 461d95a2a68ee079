//! engine::error
//!
//! Errors from resolving and flattening.
//!
//! Every variant is fatal to the run. Each one names the entity it happened
//! in and, where there is one, the reference text that caused it.

use thiserror::Error;

use crate::loader::ImportError;

/// Errors from a flattening run.
#[derive(Debug, Error)]
pub enum FlattenError {
    /// The entity has no fragment.
    #[error("no docstring available for {name}")]
    MissingDocstring { name: String },

    /// A directive argument, or one of its references, ends in a dot.
    #[error("{entity}: include '{reference}' cannot end in a period")]
    DanglingReference { entity: String, reference: String },

    /// An up-step would leave the top-level entity.
    #[error("{entity}: include '{reference}' is reaching above start module")]
    OutOfRange { entity: String, reference: String },

    /// A leaf entity has no member of that name.
    #[error("{name} does not exist (include '{reference}' in {entity})")]
    UnknownMember {
        name: String,
        entity: String,
        reference: String,
    },

    /// A submodule could not be loaded.
    #[error(transparent)]
    UnresolvedImport(#[from] ImportError),

    /// An entity includes itself, directly or transitively.
    #[error("cyclic include: {}", cycle.join(" -> "))]
    CyclicReference { cycle: Vec<String> },

    /// Includes nest deeper than the configured limit.
    #[error("{entity}: includes nest deeper than {limit} levels")]
    DepthExceeded { entity: String, limit: usize },
}
