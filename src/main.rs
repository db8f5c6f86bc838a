mod cli;
mod config;
mod glyphs;
mod logging;
mod report;
mod span_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Span(args) => span_cmd::run(args),
        Command::Report(args) => report::run(args),
    }
}
