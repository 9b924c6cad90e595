//! End-to-end conversion: one export file in, per-period files out.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::parser;
use crate::types::ParserMode;
use crate::writer;

/// Read `filename`, parse it, and write one `"<prefix> <key>.txt"`
/// file per period. Returns the paths written, in key order.
pub fn convert_file(
    filename: impl AsRef<Path>,
    prefix: &str,
    mode: ParserMode,
) -> Result<Vec<PathBuf>, ConvertError> {
    let content = fs::read_to_string(filename)?;
    let lessons = parser::parse(&content, mode)?;
    tracing::info!("Got {} lessons", lessons.len());
    Ok(writer::write_lessons(prefix, &lessons)?)
}
