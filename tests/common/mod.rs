//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary directory holding CSV inputs and JSON outputs
pub struct CsvFixture {
    temp_dir: TempDir,
}

impl CsvFixture {
    /// Create a new fixture with an empty temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the fixture directory
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a CSV file with the given content and return its path
    pub fn write_csv(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write CSV fixture");
        path
    }

    /// Path for an output file inside the fixture directory (not created)
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Read an output file back as a string
    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read output file")
    }
}

impl Default for CsvFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The two-row sample used across tests
pub const PEOPLE_CSV: &str = "name,age\nAlice,30\nBob,25\n";

/// Expected JSON for [`PEOPLE_CSV`]: 4-space indent, one key per line,
/// header-order fields, no trailing newline
pub const PEOPLE_JSON: &str = r#"[
    {
        "name": "Alice",
        "age": "30"
    },
    {
        "name": "Bob",
        "age": "25"
    }
]"#;
