//! csv2json - Convert a CSV file into a pretty-printed JSON array
//!
//! This library reads delimited text into rows keyed by header column and
//! serializes them as a JSON array of objects. It supports:
//!
//! - Header-driven records: the first CSV line names every field
//! - Standard CSV quoting (embedded commas and line breaks in quoted fields)
//! - Uneven rows: short rows pad missing fields with `null`, long rows collect
//!   the excess cells under an overflow key
//! - Stable output: 4-space indentation, field order matching the header,
//!   byte-identical across runs on unchanged input
//!
//! # Example
//!
//! ```no_run
//! use csv2json::convert_file;
//! use std::path::Path;
//!
//! let count = convert_file(Path::new("pop.csv"), Path::new("pop.json"))?;
//! println!("Converted {} records", count);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod convert;
pub mod models;
pub mod parsers;

// Re-export commonly used types
pub use convert::{convert_file, to_pretty_json};
pub use models::{Document, Record};
pub use parsers::csv::read_csv_file;
