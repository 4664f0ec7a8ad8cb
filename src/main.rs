//! CLI entry point for clipping a regular cell grid to a boundary polygon

use boundary_grid::io::cli::{Cli, GridProcessor};
use boundary_grid::io::logging::init_logging;
use clap::Parser;

fn main() -> boundary_grid::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let processor = GridProcessor::new(cli);
    processor.process().map(|_| ())
}
