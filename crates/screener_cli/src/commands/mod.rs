//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod heatmap;
pub mod scenarios;
pub mod timeline;

use crate::config::OutputFormat;
use crate::Result;
use serde::Serialize;
use std::io::Write;

/// Write `value` as pretty JSON followed by a newline.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Write already rendered text.
fn print_text(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    Ok(())
}

/// Resolve the effective output format.
pub fn resolve_format(flag: Option<OutputFormat>, configured: OutputFormat) -> OutputFormat {
    flag.unwrap_or(configured)
}
