use crate::constants::{verbosity, DEFAULT_DRIVER_SCRIPT};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for modscaffold.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root of the template project to instantiate in place.
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Predefined answers as JSON/YAML string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Path to a JSON or YAML file with predefined answers.
    #[arg(long = "answers-file", value_name = "FILE")]
    pub answers_file: Option<PathBuf>,

    /// Never prompt; missing answers fall back to their defaults.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Skip the final "Proceed with these settings?" confirmation.
    #[arg(short, long)]
    pub yes: bool,

    /// Fail the run, without relocating the package, if any file would be
    /// skipped because its destination already exists.
    #[arg(long)]
    pub strict: bool,

    /// File name of the driver script shipped in the template.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_DRIVER_SCRIPT)]
    pub driver: String,
}

/// Parse command line arguments, exiting with usage on error.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
