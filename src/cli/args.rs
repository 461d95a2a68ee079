//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--config <file>`: Use this global config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// flatdoc - Flat documentation from documented module trees
#[derive(Parser, Debug)]
#[command(name = "flatdoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if flatdoc was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Global config file to use instead of the default locations
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Options controlling where modules are found and how deep includes go.
#[derive(Args, Debug, Clone, Default)]
pub struct ResolutionArgs {
    /// Directory to search for module manifests (repeatable; overrides config)
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Maximum include nesting
    #[arg(long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_depth: Option<usize>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Flatten a module's documentation
    #[command(
        name = "build",
        long_about = "Flatten a module's documentation.\n\n\
            Loads the named module, follows every !INCLUDE directive in its \
            docstring (and in the docstrings it includes), and writes the \
            resulting single document to stdout or to a file.",
        after_help = "\
EXAMPLES:
    # Print the flattened docs of package `mypkg`
    flatdoc build mypkg

    # Search two manifest roots and write README.md
    flatdoc build mypkg -r docs -r vendor/docs -o README.md"
    )]
    Build {
        /// Qualified name of the top-level module
        name: String,

        #[command(flatten)]
        resolution: ResolutionArgs,

        /// Write the document to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check that every include of a module resolves
    #[command(
        name = "check",
        long_about = "Check that every include of a module resolves.\n\n\
            Performs the full flattening run but discards the document. \
            Exits non-zero on the first broken include."
    )]
    Check {
        /// Qualified name of the top-level module
        name: String,

        #[command(flatten)]
        resolution: ResolutionArgs,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
