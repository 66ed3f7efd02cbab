use crate::utils::parse_folder_list;
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Roots to scan. `None` means ask for them.
    pub folders: Option<Vec<String>>,
    /// Requested output name. `None` means ask for it.
    pub output_name: Option<String>,
    /// Directory the output file is created in.
    pub output_dir: PathBuf,
    /// Whether missing values are prompted for or defaulted.
    pub prompt: bool,
    pub verbosity: u8,
}

pub fn build_command() -> Command {
    Command::new("folder2md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Collects source files from folders into a single .md file")
        .arg(
            Arg::new("folders")
                .value_name("FOLDERS")
                .help("Folders to scan, comma separated lists accepted (prompted for when omitted)")
                .num_args(1..),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("NAME")
                .help("Output file name, created in the current directory (default: output.md)")
                .num_args(1),
        )
        .arg(
            Arg::new("no-prompt")
                .short('y')
                .long("no-prompt")
                .help("Never prompt; use defaults for anything not given")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v, -vv, -vvv)")
                .action(ArgAction::Count),
        )
}

pub fn parse_args() -> Result<Config> {
    let matches = build_command().get_matches();
    config_from_matches(&matches, std::env::current_dir()?)
}

pub fn config_from_matches(matches: &ArgMatches, output_dir: PathBuf) -> Result<Config> {
    let folders = matches
        .get_many::<String>("folders")
        .map(|vals| vals.flat_map(|v| parse_folder_list(v)).collect());

    let output_name = matches.get_one::<String>("output").cloned();

    Ok(Config {
        folders,
        output_name,
        output_dir,
        prompt: !matches.get_flag("no-prompt"),
        verbosity: matches.get_count("verbose"),
    })
}

/// Installs the `env_logger` backend. `RUST_LOG` overrides the verbosity level.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
