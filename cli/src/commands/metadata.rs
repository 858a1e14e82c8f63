//! Metadata command — prints the module descriptor.

use std::io::Write;

use anyhow::{Context, Result};

/// Write the module metadata document as a single JSON line.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run(mut out: impl Write) -> Result<()> {
    serde_json::to_writer(&mut out, &pxp_common::module_metadata())
        .context("writing metadata")?;
    writeln!(out).context("writing metadata")?;
    Ok(())
}
