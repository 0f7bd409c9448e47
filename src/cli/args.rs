// src/cli/args.rs
use std::{ffi::OsString, path::PathBuf};

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, ValueHint, error::ErrorKind};
use line_tools_usecase::Tool;

/// Arguments shared by every tool. Name and about text are set per binary.
#[derive(Parser, Debug)]
#[command(version = crate::VERSION)]
pub struct Args {
    /// Input text file, one record per line
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Directory for the results file (created if missing)
    #[arg(long, env = "LINE_TOOLS_RESULTS_DIR", value_hint = ValueHint::DirPath)]
    pub results_dir: Option<PathBuf>,

    /// Log more on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Invocation {
    Run(Args),
    /// `--help` or `--version`; clap already rendered the text.
    Info(clap::Error),
    /// Anything else: the binary prints its one-line usage.
    Usage(ErrorKind),
}

/// Parse `argv` (program name first) for `tool`.
pub fn parse_args<I, T>(tool: Tool, argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let command = Args::command()
        .name(tool.binary_name())
        .bin_name(tool.binary_name())
        .about(tool.about());

    match command
        .try_get_matches_from(argv)
        .and_then(|matches| Args::from_arg_matches(&matches))
    {
        Ok(args) => Invocation::Run(args),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Info(err)
        }
        Err(err) => Invocation::Usage(err.kind()),
    }
}
