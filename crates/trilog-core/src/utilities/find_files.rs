//! Directory listing by extension and name prefix

use crate::errors::{Result, TrilogError};
use std::fs;
use std::path::{Path, PathBuf};

/// List entries of `folder` whose extension is `ext` and, when `prefixes`
/// is non-empty, whose file name starts with one of them
///
/// `ext` may be given with or without its leading dot; an empty `ext`
/// selects entries without an extension. Matching is case-sensitive and
/// does not descend into subdirectories. Results are full paths, sorted.
///
/// # Errors
///
/// Returns `TrilogError::Io` if `folder` cannot be read.
pub fn find_files<S: AsRef<str>>(folder: &Path, ext: &str, prefixes: &[S]) -> Result<Vec<PathBuf>> {
    let wanted = ext.strip_prefix('.').unwrap_or(ext);

    let mut matches: Vec<PathBuf> = fs::read_dir(folder)
        .map_err(|e| TrilogError::io("find_files", folder, e))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            let actual = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            actual == wanted
        })
        .filter(|path| {
            if prefixes.is_empty() {
                return true;
            }
            path.file_name()
                .and_then(|name| name.to_str())
                .map(|name| prefixes.iter().any(|p| name.starts_with(p.as_ref())))
                .unwrap_or(false)
        })
        .collect();

    matches.sort();
    tracing::debug!(
        op = "find_files",
        folder = %folder.display(),
        ext = wanted,
        matched = matches.len() as u64
    );
    Ok(matches)
}
