//! The read -> serialize -> write pipeline.
//!
//! # Error Handling Strategy
//!
//! Every failure is terminal: open, parse, and write errors carry the failing
//! path in their context and propagate to the caller, which surfaces them on
//! stderr with a nonzero exit. There are no retries and no partial-output
//! cleanup; if writing fails partway, a truncated output file may remain.
//! The input is fully read before the output path is touched, so a failed
//! read never creates or modifies the output file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::models::Document;
use crate::parsers::read_csv_file;

/// Serialize a document as a JSON array of objects.
///
/// Output uses 4-space indentation per nesting level, standard JSON string
/// escaping, and one key per line. Object keys appear in header order and
/// values are the verbatim cell strings (no numeric or boolean coercion).
/// An empty document serializes as `[]`. No trailing newline is appended.
pub fn to_pretty_json(document: &Document) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer).context("Failed to serialize records to JSON")?;

    String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")
}

/// Convert a CSV file to a JSON file.
///
/// Reads the whole input into memory, serializes it, and writes the JSON text
/// to `output` in one operation, creating or truncating the file as needed.
///
/// # Returns
///
/// The number of data rows converted (header line excluded).
///
/// # Errors
///
/// Returns an error if:
/// - The input cannot be opened or parsed (see [`read_csv_file`])
/// - The output cannot be created or written (permission denied, invalid
///   path, disk full)
///
/// # Examples
///
/// ```no_run
/// use csv2json::convert_file;
/// use std::path::Path;
///
/// let count = convert_file(Path::new("pop.csv"), Path::new("pop.json"))?;
/// assert!(count > 0);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let document = read_csv_file(input)?;
    let json = to_pretty_json(&document)?;

    fs::write(output, json)
        .with_context(|| format!("Failed to write JSON output: {}", output.display()))?;

    Ok(document.len())
}
