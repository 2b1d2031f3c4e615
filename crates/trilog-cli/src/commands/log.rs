//! Log command
//!
//! Usage: trilog log <MESSAGE> [--to <SINKS>] [--config <FILE>]
//!        [--report <PATH>] [--log <PATH>] [--no-log] [--aux <JSON>]...

use clap::Args;
use std::path::PathBuf;
use trilog_core::{AuxValue, LoggerConfig, MultiSinkLogger, SinkSelection};

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Message text
    pub message: String,

    /// Sinks to write to: console, report, log, report-and-log or all
    #[arg(long = "to", default_value = "all")]
    pub to: SinkSelection,

    /// TOML file with report_path, log_path and log_enabled
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report file (overrides the config file)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Disable the log file sink
    #[arg(long)]
    pub no_log: bool,

    /// Auxiliary value as JSON; repeat for several values
    #[arg(long = "aux", value_name = "JSON")]
    pub aux: Vec<String>,
}

/// Execute log command
pub fn execute(args: LogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(&args)?;
    let aux = args
        .aux
        .iter()
        .map(|text| AuxValue::from_json_str(text))
        .collect::<Result<Vec<_>, _>>()?;

    let logger = MultiSinkLogger::stdout(config);
    logger.dispatch(args.to, &args.message, &aux)?;
    Ok(())
}

/// Merge the optional config file with command-line overrides
fn resolve_config(args: &LogArgs) -> Result<LoggerConfig, Box<dyn std::error::Error>> {
    let mut config = match (&args.config, &args.report, &args.log) {
        (Some(path), _, _) => LoggerConfig::load(path)?,
        (None, Some(report), Some(log)) => LoggerConfig::new(report, log, true),
        (None, _, _) => {
            return Err("either --config or both --report and --log are required".into());
        }
    };

    if let Some(report) = &args.report {
        config = config.with_report_path(report);
    }
    if let Some(log) = &args.log {
        config = config.with_log_path(log);
    }
    if args.no_log {
        config = config.with_log_enabled(false);
    }
    Ok(config)
}
