use std::process::ExitCode;

use clap::Parser;
use menuboard::{execute, logging, Cli, TermIo};
use menuboard_registry::JsonFileStore;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("warning: logging unavailable: {}", err);
    }

    let store = JsonFileStore::new(&cli.config);
    let mut io = TermIo::new();
    match execute(&cli, &store, &mut io) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
