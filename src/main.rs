//! CLI entry point for the arithmetic-fact worksheet generator

use clap::Parser;
use factsheet::io::cli::{Cli, WorksheetRunner};

fn main() -> factsheet::Result<()> {
    let cli = Cli::parse();
    let runner = WorksheetRunner::new(cli);
    runner.run()
}
