//! trilog CLI
//!
//! Command-line front end for the multi-sink logger

use clap::{Parser, Subcommand, ValueEnum};
use trilog_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "trilog")]
#[command(about = "trilog - console, report and log file writer for toolkit scripts", long_about = None)]
struct Cli {
    /// Internal diagnostics on stderr
    #[arg(long, global = true, value_enum, default_value_t = Diagnostics::Off)]
    diagnostics: Diagnostics,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Diagnostics {
    /// No subscriber is installed
    Off,
    /// Human-readable lines, debug level
    Pretty,
    /// One JSON object per event, info level
    Json,
}

impl Diagnostics {
    fn profile(self) -> Option<Profile> {
        match self {
            Diagnostics::Off => None,
            Diagnostics::Pretty => Some(Profile::Development),
            Diagnostics::Json => Some(Profile::Production),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write a message to one or more sinks
    Log(commands::log::LogArgs),
    /// List files in a folder by extension and prefix
    Find(commands::find::FindArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.diagnostics.profile() {
        logging_facility::init(profile);
    }

    let result = match cli.command {
        Commands::Log(args) => commands::log::execute(args),
        Commands::Find(args) => commands::find::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
