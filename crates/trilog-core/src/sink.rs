//! Output sinks
//!
//! The console is an injected capability; the report and log files share
//! one append primitive.

use crate::errors::{Result, TrilogError};
use crate::{log_op_end, log_op_error, log_op_start};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, Weak};
use std::time::Instant;
use trilog_core_types::schema::{FIELD_BYTES, FIELD_PATH, FIELD_SINK};
use trilog_core_types::SinkKind;

/// Interactive console sink
///
/// A console cannot report failure; an unavailable console is fatal.
pub trait Console: Send + Sync {
    fn print_line(&self, line: &str);
}

impl<C: Console + ?Sized> Console for Arc<C> {
    fn print_line(&self, line: &str) {
        (**self).print_line(line)
    }
}

impl<C: Console + ?Sized> Console for &C {
    fn print_line(&self, line: &str) {
        (**self).print_line(line)
    }
}

/// Console writing to the process stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Console forwarding each line as an `info` diagnostics event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn print_line(&self, line: &str) {
        tracing::info!(
            target: "trilog::console",
            { { FIELD_SINK } = SinkKind::Console.as_str() },
            "{}",
            line
        );
    }
}

/// Console keeping every line in memory
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Console for MemoryConsole {
    fn print_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

static PATH_LOCKS: OnceLock<Mutex<HashMap<PathBuf, Weak<Mutex<()>>>>> = OnceLock::new();

/// Registry key for a destination: canonical parent directory plus file name
///
/// Falls back to the path as given when the parent cannot be resolved; the
/// append itself reports that failure.
fn lock_key(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// Process-wide lock for one destination
///
/// The registry holds weak handles; entries nobody holds are dropped on the
/// next lookup.
fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    let key = lock_key(path);
    let registry = PATH_LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut locks = registry.lock().unwrap_or_else(PoisonError::into_inner);
    locks.retain(|_, lock| lock.strong_count() > 0);

    if let Some(lock) = locks.get(&key).and_then(Weak::upgrade) {
        return lock;
    }
    let lock = Arc::new(Mutex::new(()));
    locks.insert(key, Arc::downgrade(&lock));
    lock
}

/// Append `text` to the destination, creating it if absent
///
/// The destination is opened, written and closed within the call while the
/// destination's lock is held, so concurrent appends never interleave.
///
/// # Errors
///
/// Returns `TrilogError::Io` if the destination cannot be opened or written.
pub fn append_to(sink: SinkKind, path: &Path, text: &str) -> Result<()> {
    let started = Instant::now();
    log_op_start!(
        "append",
        { FIELD_SINK } = sink.as_str(),
        { FIELD_PATH } = %path.display()
    );

    let lock = path_lock(path);
    let result = {
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(text.as_bytes()))
            .map_err(|e| TrilogError::io("append", path, e))
    };

    let duration_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(()) => {
            log_op_end!(
                "append",
                duration_ms = duration_ms,
                { FIELD_SINK } = sink.as_str(),
                { FIELD_PATH } = %path.display(),
                { FIELD_BYTES } = text.len() as u64
            );
            Ok(())
        }
        Err(err) => {
            log_op_error!(
                "append",
                &err,
                duration_ms = duration_ms,
                { FIELD_SINK } = sink.as_str(),
                { FIELD_PATH } = %path.display()
            );
            Err(err)
        }
    }
}
