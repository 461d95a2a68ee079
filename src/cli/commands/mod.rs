//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each flattening handler:
//! 1. Loads configuration for the working directory
//! 2. Merges CLI resolution flags over it
//! 3. Builds a fresh [`Namespace`] and runs the engine
//! 4. Writes the document or a report

mod build;
mod check;
mod completion;

// Re-export command functions for testing and direct invocation
pub use build::build;
pub use check::check;
pub use completion::completion;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::cli::args::{Command, ResolutionArgs};
use crate::cli::Context;
use crate::core::config::Config;
use crate::engine::FlattenOptions;
use crate::loader::{FsLoader, Namespace};
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Build {
            name,
            resolution,
            output,
        } => build::build(ctx, &name, &resolution, output.as_deref()),
        Command::Check { name, resolution } => check::check(ctx, &name, &resolution),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Everything a flattening run needs, after config and flags are merged.
#[derive(Debug)]
pub(crate) struct RunSetup {
    pub namespace: Namespace,
    pub options: FlattenOptions,
    pub roots: Vec<PathBuf>,
}

/// Load config, apply CLI overrides, and build the namespace.
pub(crate) fn prepare(ctx: &Context, resolution: &ResolutionArgs) -> Result<RunSetup> {
    let working_dir = ctx.working_dir()?;
    let explicit = ctx
        .config
        .as_deref()
        .map(|path| ctx.resolve_path(path))
        .transpose()?;

    let loaded = Config::load(explicit.as_deref(), &working_dir)
        .context("failed to load configuration")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            ctx.verbosity,
        );
    }
    let config = loaded.config;
    debug!(
        global = ?config.global_path(),
        project = ?config.project_path(),
        "loaded configuration"
    );

    let roots = if resolution.roots.is_empty() {
        config.roots()
    } else {
        resolution
            .roots
            .iter()
            .map(|root| ctx.resolve_path(root))
            .collect::<Result<Vec<_>>>()?
    };

    let mut options = FlattenOptions::default();
    if let Some(depth) = resolution.max_depth.or(config.max_depth()) {
        options.max_depth = depth;
    }

    debug!(roots = ?roots, max_depth = options.max_depth, "resolved run settings");

    Ok(RunSetup {
        namespace: Namespace::new(FsLoader::new(roots.clone())),
        options,
        roots,
    })
}
