use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::convert::convert_file;

#[derive(Parser)]
#[command(name = "csv2json")]
#[command(version = "0.1.0")]
#[command(about = "Convert a CSV file to a pretty-printed JSON array", long_about = None)]
pub struct Cli {
    /// Input CSV file
    #[arg(default_value = "pop.csv")]
    pub input: PathBuf,

    /// Output JSON file
    #[arg(default_value = "pop.json")]
    pub output: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let count = convert_file(&cli.input, &cli.output)?;
    println!("Converted {} records: {} -> {}", count, cli.input.display(), cli.output.display());

    Ok(())
}
