//! Multi-sink logger
//!
//! Routes a message, with optional auxiliary data, to any combination of a
//! console, a report file and a log file. Only the log file can be switched
//! off.
//!
//! # Example
//!
//! ```no_run
//! use trilog_core::{AuxValue, LoggerConfig, MultiSinkLogger};
//!
//! let logger = MultiSinkLogger::stdout(LoggerConfig::new("report.txt", "run.log", true));
//! logger.to_all("clip finished", &[AuxValue::mapping([("features", 12)])])?;
//! # Ok::<(), trilog_core::TrilogError>(())
//! ```

use crate::aux_data::AuxValue;
use crate::config::LoggerConfig;
use crate::errors::Result;
use crate::render::render_entry;
use crate::sink::{append_to, Console, StdoutConsole};
use trilog_core_types::schema::{EVENT_SKIPPED, FIELD_EVENT, FIELD_OP, FIELD_SINK};
use trilog_core_types::{SinkKind, SinkSelection};

/// Logger writing to a console, a report file and an optional log file
#[derive(Debug)]
pub struct MultiSinkLogger<C: Console = StdoutConsole> {
    config: LoggerConfig,
    console: C,
}

impl MultiSinkLogger<StdoutConsole> {
    /// Logger whose console sink is stdout
    pub fn stdout(config: LoggerConfig) -> Self {
        Self::new(config, StdoutConsole)
    }
}

impl<C: Console> MultiSinkLogger<C> {
    pub fn new(config: LoggerConfig, console: C) -> Self {
        Self { config, console }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Write `message` to the console, verbatim, as one line
    pub fn to_console(&self, message: &str) {
        self.console.print_line(message);
    }

    /// Append `message` and rendered `aux` to the report file
    ///
    /// # Errors
    ///
    /// Returns `TrilogError::Io` if the report destination is unwritable.
    pub fn to_report(&self, message: &str, aux: &[AuxValue]) -> Result<()> {
        append_to(
            SinkKind::Report,
            self.config.report_path(),
            &render_entry(message, aux),
        )
    }

    /// Append `message` and rendered `aux` to the log file
    ///
    /// Does nothing, and does not create the file, when the log sink is
    /// disabled.
    ///
    /// # Errors
    ///
    /// Returns `TrilogError::Io` if the log destination is unwritable.
    pub fn to_logfile(&self, message: &str, aux: &[AuxValue]) -> Result<()> {
        if !self.config.log_enabled() {
            tracing::debug!(
                { FIELD_OP } = "to_logfile",
                { FIELD_EVENT } = EVENT_SKIPPED,
                { FIELD_SINK } = SinkKind::Log.as_str(),
                "log sink disabled"
            );
            return Ok(());
        }
        append_to(
            SinkKind::Log,
            self.config.log_path(),
            &render_entry(message, aux),
        )
    }

    /// Report first, then log
    ///
    /// # Errors
    ///
    /// Stops at the first failing sink.
    pub fn to_report_and_log(&self, message: &str, aux: &[AuxValue]) -> Result<()> {
        self.to_report(message, aux)?;
        self.to_logfile(message, aux)
    }

    /// Console, then report, then log
    ///
    /// # Errors
    ///
    /// Stops at the first failing file sink; the console line is already out.
    pub fn to_all(&self, message: &str, aux: &[AuxValue]) -> Result<()> {
        self.to_console(message);
        self.to_report(message, aux)?;
        self.to_logfile(message, aux)
    }

    /// Route one call according to `selection`
    ///
    /// Sinks are visited in `SinkSelection::sinks` order. The console never
    /// receives aux data.
    ///
    /// # Errors
    ///
    /// Propagates the first file-sink failure; later sinks are not reached.
    pub fn dispatch(&self, selection: SinkSelection, message: &str, aux: &[AuxValue]) -> Result<()> {
        for sink in selection.sinks() {
            match sink {
                SinkKind::Console => self.to_console(message),
                SinkKind::Report => self.to_report(message, aux)?,
                SinkKind::Log => self.to_logfile(message, aux)?,
            }
        }
        Ok(())
    }
}
