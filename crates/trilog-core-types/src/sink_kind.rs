//! Sink identifiers
//!
//! A `SinkKind` names one destination; a `SinkSelection` names the
//! combination of destinations a single logging call is routed to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three output destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Interactive console
    Console,
    /// Plain-text report file
    Report,
    /// Plain-text log file (can be disabled)
    Log,
}

impl SinkKind {
    /// Stable lowercase name used in diagnostics fields
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Console => "console",
            SinkKind::Report => "report",
            SinkKind::Log => "log",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routing choice for a single logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SinkSelection {
    Console,
    Report,
    Log,
    ReportAndLog,
    All,
}

impl SinkSelection {
    /// Sinks addressed by this selection, in write order
    ///
    /// The log sink is listed even though a disabled log sink will skip it.
    pub fn sinks(&self) -> &'static [SinkKind] {
        match self {
            SinkSelection::Console => &[SinkKind::Console],
            SinkSelection::Report => &[SinkKind::Report],
            SinkSelection::Log => &[SinkKind::Log],
            SinkSelection::ReportAndLog => &[SinkKind::Report, SinkKind::Log],
            SinkSelection::All => &[SinkKind::Console, SinkKind::Report, SinkKind::Log],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SinkSelection::Console => "console",
            SinkSelection::Report => "report",
            SinkSelection::Log => "log",
            SinkSelection::ReportAndLog => "report-and-log",
            SinkSelection::All => "all",
        }
    }
}

impl fmt::Display for SinkSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(SinkSelection::Console),
            "report" => Ok(SinkSelection::Report),
            "log" | "logfile" => Ok(SinkSelection::Log),
            "report-and-log" | "report-log" => Ok(SinkSelection::ReportAndLog),
            "all" => Ok(SinkSelection::All),
            other => Err(format!(
                "unknown sink selection '{}' (expected console, report, log, report-and-log or all)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selection_order() {
        assert_eq!(
            SinkSelection::All.sinks(),
            &[SinkKind::Console, SinkKind::Report, SinkKind::Log]
        );
    }

    #[test]
    fn test_report_and_log_excludes_console() {
        assert!(!SinkSelection::ReportAndLog
            .sinks()
            .contains(&SinkKind::Console));
    }

    #[test]
    fn test_selection_parse_round_trip() {
        for sel in [
            SinkSelection::Console,
            SinkSelection::Report,
            SinkSelection::Log,
            SinkSelection::ReportAndLog,
            SinkSelection::All,
        ] {
            assert_eq!(sel.as_str().parse::<SinkSelection>().unwrap(), sel);
        }
    }

    #[test]
    fn test_selection_parse_rejects_unknown() {
        let err = "printer".parse::<SinkSelection>().unwrap_err();
        assert!(err.contains("printer"));
    }

    #[test]
    fn test_sink_kind_serialization() {
        let json = serde_json::to_string(&SinkKind::Report).unwrap();
        assert_eq!(json, "\"report\"");
        let back: SinkKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SinkKind::Report);
    }
}
