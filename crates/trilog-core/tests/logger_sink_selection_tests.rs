#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{read_opt, temp_logger};
use proptest::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::TempDir;
use trilog_core::{AuxValue, Console, LoggerConfig, MultiSinkLogger, SinkSelection};

/// Console noting, per printed line, which destination files already exist
struct SnapshotConsole {
    report: PathBuf,
    log: PathBuf,
    seen: Mutex<Vec<(String, bool, bool)>>,
}

impl Console for SnapshotConsole {
    fn print_line(&self, line: &str) {
        self.seen.lock().unwrap().push((
            line.to_string(),
            self.report.exists(),
            self.log.exists(),
        ));
    }
}

#[test]
fn test_console_write_is_verbatim_and_file_sinks_untouched() {
    let dir = TempDir::new().unwrap();
    let logger = temp_logger(&dir, true);

    logger.to_console("  spaced  message  ");

    assert_eq!(
        logger.console().lines(),
        vec!["  spaced  message  ".to_string()]
    );
    assert!(read_opt(logger.config().report_path()).is_none());
    assert!(read_opt(logger.config().log_path()).is_none());
}

#[test]
fn test_report_frames_message_with_blank_lines() {
    let dir = TempDir::new().unwrap();
    let logger = temp_logger(&dir, true);

    logger.to_report("first", &[]).unwrap();
    logger.to_report("second", &[]).unwrap();

    let report = read_opt(logger.config().report_path()).unwrap();
    assert_eq!(report, "\nfirst\n\n\nsecond\n\n");
    assert!(read_opt(logger.config().log_path()).is_none());
}

#[test]
fn test_disabled_log_does_not_create_destination() {
    let dir = TempDir::new().unwrap();
    let logger = temp_logger(&dir, false);

    logger
        .to_logfile("quiet", &[AuxValue::from(vec![1, 2, 3])])
        .unwrap();
    logger.to_report_and_log("quiet too", &[]).unwrap();

    assert!(!logger.config().log_path().exists());
    assert!(logger.config().report_path().exists());
}

#[test]
fn test_enabled_log_creates_then_appends() {
    let dir = TempDir::new().unwrap();
    let logger = temp_logger(&dir, true);
    assert!(!logger.config().log_path().exists());

    logger.to_logfile("entry one", &[]).unwrap();
    assert!(logger.config().log_path().exists());

    logger.to_logfile("entry two", &[]).unwrap();
    let log = read_opt(logger.config().log_path()).unwrap();
    assert!(log.contains("entry one"));
    assert!(log.contains("entry two"));
    assert!(log.find("entry one").unwrap() < log.find("entry two").unwrap());
}

#[test]
fn test_report_and_log_write_identical_content() {
    let dir = TempDir::new().unwrap();
    let logger = temp_logger(&dir, true);
    let aux = [AuxValue::mapping([("layer", AuxValue::from("parcels"))])];

    logger.to_report_and_log("both", &aux).unwrap();

    let report = read_opt(logger.config().report_path()).unwrap();
    let log = read_opt(logger.config().log_path()).unwrap();
    assert_eq!(report, log);
    assert!(logger.console().lines().is_empty());
}

#[test]
fn test_mapping_aux_renders_nested_lines_one_level_deeper() {
    let dir = TempDir::new().unwrap();
    let logger = temp_logger(&dir, true);

    logger
        .to_report("dump", &[AuxValue::mapping([("a", vec![1, 2])])])
        .unwrap();

    let report = read_opt(logger.config().report_path()).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    let mapping_idx = lines
        .iter()
        .position(|l| *l == r#"{"a": [1, 2]}"#)
        .expect("mapping line");
    assert!(lines.contains(&"\ta: [1, 2]"));
    let one = lines.iter().position(|l| *l == "\t1").expect("scalar 1");
    let two = lines.iter().position(|l| *l == "\t2").expect("scalar 2");
    assert!(mapping_idx < one && one < two);
}

#[test]
fn test_all_with_log_disabled_skips_log() {
    let dir = TempDir::new().unwrap();
    let logger = temp_logger(&dir, false);

    logger.to_all("everywhere", &[]).unwrap();

    assert_eq!(logger.console().lines(), vec!["everywhere".to_string()]);
    assert!(read_opt(logger.config().report_path())
        .unwrap()
        .contains("everywhere"));
    assert!(!logger.config().log_path().exists());
}

#[test]
fn test_all_with_log_enabled_reaches_every_sink() {
    let dir = TempDir::new().unwrap();
    let logger = temp_logger(&dir, true);

    logger.to_all("everywhere", &[AuxValue::from(7)]).unwrap();

    assert_eq!(logger.console().lines(), vec!["everywhere".to_string()]);
    let report = read_opt(logger.config().report_path()).unwrap();
    let log = read_opt(logger.config().log_path()).unwrap();
    assert_eq!(report, log);
    assert!(report.contains("\n7\n<int>\n"));
}

#[test]
fn test_all_writes_console_before_either_file() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("report.txt");
    let log = dir.path().join("log.txt");
    let console = SnapshotConsole {
        report: report.clone(),
        log: log.clone(),
        seen: Mutex::new(Vec::new()),
    };
    let logger = MultiSinkLogger::new(LoggerConfig::new(&report, &log, true), console);

    logger.to_all("ordered", &[]).unwrap();

    assert_eq!(
        *logger.console().seen.lock().unwrap(),
        vec![("ordered".to_string(), false, false)]
    );
    assert!(report.exists());
    assert!(log.exists());
}

#[test]
fn test_all_writes_report_before_log() {
    let dir = TempDir::new().unwrap();
    // a directory at the log path makes the log append fail after the report
    let log = dir.path().join("log_dir");
    std::fs::create_dir(&log).unwrap();
    let logger = MultiSinkLogger::new(
        LoggerConfig::new(dir.path().join("report.txt"), &log, true),
        trilog_core::MemoryConsole::new(),
    );

    assert!(logger.to_all("partial", &[]).is_err());

    assert_eq!(logger.console().lines(), vec!["partial".to_string()]);
    assert_eq!(
        read_opt(logger.config().report_path()).unwrap(),
        "\npartial\n\n"
    );
}

#[test]
fn test_dispatch_matches_direct_calls() {
    let dir = TempDir::new().unwrap();
    let logger = temp_logger(&dir, true);

    logger
        .dispatch(SinkSelection::ReportAndLog, "routed", &[])
        .unwrap();

    assert!(logger.console().lines().is_empty());
    assert!(read_opt(logger.config().report_path())
        .unwrap()
        .contains("routed"));
    assert!(read_opt(logger.config().log_path())
        .unwrap()
        .contains("routed"));
}

#[test]
fn test_concurrent_appends_do_not_interleave_entries() {
    let dir = TempDir::new().unwrap();
    let logger = Arc::new(temp_logger(&dir, false));
    let aux: Vec<AuxValue> = vec![AuxValue::from((0..50).collect::<Vec<i32>>())];

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            let aux = aux.clone();
            thread::spawn(move || {
                for i in 0..10 {
                    logger.to_report(&format!("thread {} entry {}", t, i), &aux).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let report = read_opt(logger.config().report_path()).unwrap();
    let single = trilog_core::render::render_entry("X", &aux);
    let block = &single["\nX\n\n".len()..];
    // Every entry is followed immediately by its own complete aux block
    for t in 0..8 {
        for i in 0..10 {
            let entry = format!("\nthread {} entry {}\n\n{}", t, i, block);
            assert!(report.contains(&entry), "entry {}/{} was torn", t, i);
        }
    }
}

proptest! {
    #[test]
    fn prop_console_receives_exactly_one_verbatim_line(msg in "[^\n]{0,64}") {
        let dir = TempDir::new().unwrap();
        let logger = temp_logger(&dir, true);

        logger.to_console(&msg);

        prop_assert_eq!(logger.console().lines(), vec![msg.clone()]);
        prop_assert!(!logger.config().report_path().exists());
        prop_assert!(!logger.config().log_path().exists());
    }

    #[test]
    fn prop_report_contains_message_and_never_touches_log(msg in "[a-zA-Z0-9 ]{1,64}") {
        let dir = TempDir::new().unwrap();
        let logger = temp_logger(&dir, true);

        logger.to_report(&msg, &[]).unwrap();

        let report = read_opt(logger.config().report_path()).unwrap();
        prop_assert_eq!(report, format!("\n{}\n\n", msg));
        prop_assert!(!logger.config().log_path().exists());
    }
}
