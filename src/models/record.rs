use serde_json::{Map, Value};

/// One CSV data row, keyed by header field name in header order.
pub type Record = Map<String, Value>;

/// The ordered sequence of records parsed from one CSV file.
pub type Document = Vec<Record>;

/// Key that collects cells beyond the header width.
///
/// Rows longer than the header store their excess cells as a JSON array under
/// this key, so no input data is silently dropped.
pub const OVERFLOW_KEY: &str = "null";

/// Build a record from a header and the cells of one data row.
///
/// Each header field maps to the cell at the same position, kept verbatim as a
/// string. A row shorter than the header leaves the missing fields as JSON
/// `null`; a row longer than the header collects the excess cells under
/// [`OVERFLOW_KEY`]. Duplicate header names keep the first name's position but
/// take the value of the last duplicate column.
pub fn build_record(header: &[String], cells: &[&str]) -> Record {
    let mut record = Record::new();

    for (i, field) in header.iter().enumerate() {
        let value = match cells.get(i) {
            Some(cell) => Value::String((*cell).to_string()),
            None => Value::Null,
        };
        record.insert(field.clone(), value);
    }

    if cells.len() > header.len() {
        let extra: Vec<Value> =
            cells[header.len()..].iter().map(|cell| Value::String((*cell).to_string())).collect();
        record.insert(OVERFLOW_KEY.to_string(), Value::Array(extra));
    }

    record
}
