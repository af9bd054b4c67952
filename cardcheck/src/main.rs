// cardcheck/src/main.rs
//! Cardcheck entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the command
//! runners. Exit-code policy lives here: validation findings never abort a
//! run, but `--fail-on-invalid` turns them into exit code 2.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cardcheck::cli::{Cli, Commands};
use cardcheck::commands;
use cardcheck::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Check(cmd) => {
            let summary = commands::check::run_check(&cmd)?;
            if cmd.fail_on_invalid && summary.invalid > 0 {
                std::process::exit(2);
            }
        }
    }

    Ok(())
}
