use clap::Parser;
use lsbtext_core::LsbTextError;

mod cli;
mod commands;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, LsbTextError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Hide(h) => h.run(&args.folders),
        Commands::Reveal(r) => r.run(&args.folders),
    }
}
