//! check command - Verify that every include resolves

use anyhow::{Context as _, Result};

use super::prepare;
use crate::cli::args::ResolutionArgs;
use crate::cli::Context;
use crate::engine::flatdoc_with_options;
use crate::ui::output::{self, Verbosity};

/// Flatten `name`, discard the document, and report what was resolved.
pub fn check(ctx: &Context, name: &str, resolution: &ResolutionArgs) -> Result<()> {
    let setup = prepare(ctx, resolution)?;
    let flattened = flatdoc_with_options(name, &setup.namespace, setup.options)
        .with_context(|| format!("check failed for '{name}'"))?;

    let modules = setup.namespace.loaded();
    output::success(
        format!(
            "ok: {} ({}, {}, {})",
            name,
            output::plural(flattened.document.lines().count(), "line", "lines"),
            output::plural(flattened.includes, "include", "includes"),
            output::plural(modules.len(), "module", "modules"),
        ),
        ctx.verbosity,
    );

    if ctx.verbosity == Verbosity::Debug {
        output::status(
            format!("Modules loaded:\n{}", output::format_list(&modules, "  ")),
            ctx.verbosity,
        );
        output::status(
            format!(
                "Searched roots:\n{}",
                output::format_list(
                    &setup
                        .roots
                        .iter()
                        .map(|r| r.display().to_string())
                        .collect::<Vec<_>>(),
                    "  "
                )
            ),
            ctx.verbosity,
        );
    }

    Ok(())
}
