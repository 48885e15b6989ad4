//! CLI entry point for the photomosaic generator

use clap::Parser;
use huetile::io::cli::{self, Cli};

fn main() -> huetile::Result<()> {
    let cli = Cli::parse();
    cli::run(&cli)
}
