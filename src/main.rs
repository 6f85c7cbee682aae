//! CLI entry point for the square tile splitter

use clap::Parser;
use tilesplit::io::cli::{Cli, Runner};

fn main() -> tilesplit::Result<()> {
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    runner.run()
}
