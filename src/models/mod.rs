//! Data model for converted tabular data.
//!
//! - [`Record`] - One CSV data row as an ordered field-name → value mapping
//! - [`Document`] - The full ordered sequence of records for one input file
//!
//! Records are built fresh from the input file on every run and discarded
//! after the JSON output is written; nothing is cached between runs.

pub mod record;

pub use record::{Document, OVERFLOW_KEY, Record, build_record};
