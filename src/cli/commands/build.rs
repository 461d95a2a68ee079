//! build command - Flatten a module's documentation

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};

use super::prepare;
use crate::cli::args::ResolutionArgs;
use crate::cli::Context;
use crate::engine::flatdoc_with_options;
use crate::ui::output;

/// Flatten `name` and write the document to stdout or `output`.
pub fn build(
    ctx: &Context,
    name: &str,
    resolution: &ResolutionArgs,
    output: Option<&Path>,
) -> Result<()> {
    let setup = prepare(ctx, resolution)?;
    let flattened = flatdoc_with_options(name, &setup.namespace, setup.options)
        .with_context(|| format!("failed to build documentation for '{name}'"))?;

    match output {
        Some(path) => {
            let path = ctx.resolve_path(path)?;
            write_atomic(&path, &flattened.document)?;
            output::status(
                format!(
                    "Wrote {} ({}) to {}",
                    name,
                    output::plural(flattened.includes, "include", "includes"),
                    path.display()
                ),
                ctx.verbosity,
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(flattened.document.as_bytes())
                .and_then(|()| handle.flush())
                .context("failed to write document to stdout")?;
        }
    }

    Ok(())
}

/// Write a file atomically (temp file in the same directory, then rename).
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

    let result = write_and_rename(&temp_path, path, contents);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_rename(temp_path: &Path, path: &Path, contents: &str) -> Result<()> {
    {
        let mut file = fs::File::create(temp_path)
            .with_context(|| format!("failed to create '{}'", temp_path.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("failed to write '{}'", temp_path.display()))?;
        file.sync_all()
            .with_context(|| format!("failed to sync '{}'", temp_path.display()))?;
    }

    fs::rename(temp_path, path)
        .with_context(|| format!("failed to rename into '{}'", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_atomic_creates_parents_and_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/README.md");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!dir.path().join("out/.README.md.tmp").exists());
    }

    #[test]
    fn write_atomic_removes_temp_file_on_failure() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory cannot be replaced by a file.
        let path = dir.path().join("README.md");
        fs::create_dir_all(path.join("inner")).unwrap();

        assert!(write_atomic(&path, "doc").is_err());

        assert!(path.is_dir());
        assert!(!dir.path().join(".README.md.tmp").exists());
    }
}
