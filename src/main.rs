//! CLI entry point for the hop puzzle solver

use clap::Parser;
use hopgrid::io::cli::{Cli, SolveRunner};

fn main() -> hopgrid::Result<()> {
    let cli = Cli::parse();
    let runner = SolveRunner::new(cli);
    runner.run()
}
