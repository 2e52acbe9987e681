//! Result rendering.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact single-line JSON.
    Json,
    /// Two-space indented JSON.
    Pretty,
}

/// Serializes `value` and writes it followed by exactly one newline.
pub fn print<T: Serialize>(w: &mut dyn Write, value: &T, format: OutputFormat) -> Result<()> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    writeln!(w, "{data}")?;
    Ok(())
}
