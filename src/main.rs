use anyhow::Result;

fn main() -> Result<()> {
    csv2json::cli::run()
}
