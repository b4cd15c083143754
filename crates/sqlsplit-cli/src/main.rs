//! `sqlsplit`: prints the statements of one or more SQL scripts.

mod cli;
mod config;
mod error;
mod logging;
mod output;
mod source;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, error, info, warn};

use crate::{
    cli::{Cli, OutputFormat},
    error::CliError,
    source::Source,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_config());

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!(%err, "aborting");
            eprintln!("sqlsplit: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Splits every input and prints the result. Returns `false` if any input
/// could not be read or split; those inputs are reported and skipped.
fn run(cli: &Cli) -> Result<bool, CliError> {
    let options = cli.splitter_options();
    debug!(?options, format = ?cli.format, "starting");

    let mut ok = true;
    let mut sources = Vec::new();
    for path in cli.inputs() {
        match Source::read(&path) {
            Ok(source) => sources.push(source),
            Err(err) => {
                report(&err);
                ok = false;
            }
        }
    }

    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => {
            for source in &sources {
                match output::write_text(&mut stdout, source, options, cli.locations) {
                    Ok(count) => info!(file = %source.name, statements = count, "split"),
                    Err(err @ CliError::Split { .. }) => {
                        report(&err);
                        ok = false;
                    }
                    Err(err) => return Err(err),
                }
            }
        }
        OutputFormat::Json => {
            let mut all = Vec::new();
            for source in &sources {
                match output::records(source, options) {
                    Ok(mut records) => {
                        info!(file = %source.name, statements = records.len(), "split");
                        all.append(&mut records);
                    }
                    Err(err) => {
                        report(&err);
                        ok = false;
                    }
                }
            }
            output::write_json(&mut stdout, &all)?;
        }
    }
    stdout.flush()?;
    Ok(ok)
}

fn report(err: &CliError) {
    warn!(%err, "skipping input");
    eprintln!("sqlsplit: {err}");
}
