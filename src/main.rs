mod check_cmd;
mod cli;
mod config;
mod convert;
mod count_cmd;
mod logging;
mod shift_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::WorkcalConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = WorkcalConfig::load_optional(cli.config.as_deref())?;
    match cli.command {
        Command::Check(args) => check_cmd::run(args, &config),
        Command::Count(args) => count_cmd::run(args, &config),
        Command::Shift(args) => shift_cmd::run(args, &config),
    }
}
