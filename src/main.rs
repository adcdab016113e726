use std::{io::stdout, process::ExitCode};

use clap::Parser;
use log::{debug, info};

use notetaker::{App, Cli, Config, NoteStore, Result};

pub fn initialize_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    debug!("Logger initialized");
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let notes_file = config.get_notes_file(cli.file.as_deref());
    info!("Using notes file {}", notes_file.display());

    let app = App::new(NoteStore::new(notes_file), cli.json);
    app.run(cli.action(), &mut stdout().lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
