use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::models::{Document, build_record};

/// Parse a CSV file into an ordered sequence of records.
///
/// The first line is the header and names every field of the resulting
/// records. Standard CSV quoting is honored, so quoted fields may contain
/// commas and line breaks. The reader runs in flexible mode: rows may carry
/// fewer or more cells than the header, and [`build_record`] applies the
/// padding/overflow policy instead of the reader rejecting the row.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened (missing file, permission denied)
/// - A record fails to parse (I/O error mid-file, invalid UTF-8)
pub fn read_csv_file(path: &Path) -> Result<Document> {
    let file =
        File::open(path).with_context(|| format!("Failed to open input CSV: {}", path.display()))?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let header: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header: {}", path.display()))?
        .iter()
        .map(|field| field.to_string())
        .collect();

    let mut document = Document::new();
    for result in reader.records() {
        let row =
            result.with_context(|| format!("Failed to parse CSV record: {}", path.display()))?;
        let cells: Vec<&str> = row.iter().collect();
        document.push(build_record(&header, &cells));
    }

    Ok(document)
}
