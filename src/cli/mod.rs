//! cli
//!
//! Command-line interface layer for flatdoc.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the log subscriber
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, builds a
//! [`Context`] from the global flags, and dispatches to a handler in
//! [`commands`]. Handlers load configuration, build a
//! [`Namespace`](crate::loader::Namespace) and call into [`crate::engine`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Explicit global config file.
    pub config: Option<PathBuf>,
    /// Output verbosity.
    pub verbosity: Verbosity,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cwd: None,
            config: None,
            verbosity: Verbosity::Normal,
        }
    }
}

impl Context {
    /// The directory commands run in.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("failed to determine current directory"),
        }
    }

    /// Resolve `path` against the working directory.
    pub fn resolve_path(&self, path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(self.working_dir()?.join(path))
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        config: cli.config.clone(),
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    init_logging(ctx.verbosity);

    commands::dispatch(cli.command, &ctx)
}

/// Install a stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the verbosity.
fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.log_level().into())
        .from_env_lossy();

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
