// src/app.rs
use std::{io::Write, process::ExitCode};

use anyhow::Result;
use line_tools_infra::{
    ConsoleDiagnostics, ConsoleReport, ResultsFile, ResultsLocation, Stopwatch, TextFileSource,
};
use line_tools_ports::Clock;
use line_tools_usecase::{RunTool, Tool, publish};

use crate::{
    cli::{Invocation, parse_args},
    config::ToolConfig,
    logging,
};

/// Process entry for `tool`'s binary.
///
/// Usage errors and a missing input file are reported on stdout and still
/// exit successfully; I/O failures exit with status 1.
pub fn main_for(tool: Tool) -> ExitCode {
    let clock = Stopwatch::start();

    let args = match parse_args(tool, std::env::args_os()) {
        Invocation::Run(args) => args,
        Invocation::Info(info) => {
            logging::init(0);
            print_info(&info, &mut std::io::stdout());
            return ExitCode::SUCCESS;
        }
        Invocation::Usage(_) => {
            println!("{}", tool.usage());
            return ExitCode::SUCCESS;
        }
    };

    let config = match ToolConfig::from_args(tool, args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.verbosity);
    log::debug!("{config:?}");

    match run(&config, &clock) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Write clap's rendered help or version text to `out`.
fn print_info(info: &clap::Error, out: &mut impl Write) {
    if let Err(err) = write!(out, "{}", info.render()).and_then(|()| out.flush()) {
        log::warn!("could not print help or version: {err}");
    }
}

/// Run one tool end to end with the standard adapters.
///
/// # Errors
/// Fails when the input cannot be read or the report cannot be written.
pub fn run(config: &ToolConfig, clock: &dyn Clock) -> Result<()> {
    let source = TextFileSource;
    let mut diagnostics = ConsoleDiagnostics::stdout();

    let outcome = match RunTool::new(&source, clock).execute(
        config.tool,
        &config.input,
        &mut diagnostics,
    ) {
        Ok(outcome) => outcome,
        Err(err) if err.is_input_not_found() => {
            println!("Error: file not found -> {}", config.input.display());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let location = ResultsLocation::for_current_exe(config.results_dir.clone());
    let mut results = ResultsFile::for_input(location, &config.input);
    publish(&outcome, &mut ConsoleReport::stdout(), &mut results)?;
    Ok(())
}
