//! Scoped access to the in-memory scratch workspace
//!
//! Acquiring a `ScratchWorkspace` switches the toolkit to the scratch
//! workspace; dropping it switches back to whatever was current before,
//! on every exit path including early returns and panics.

use crate::errors::Result;
use crate::toolkit::{DatasetKind, GisToolkit};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// Name of the toolkit's in-memory workspace
pub const SCRATCH_WORKSPACE: &str = "in_memory";

/// Guard holding the toolkit inside a scratch workspace
pub struct ScratchWorkspace<'a, T: GisToolkit + ?Sized> {
    toolkit: &'a mut T,
    previous: Option<String>,
}

impl<'a, T: GisToolkit + ?Sized> ScratchWorkspace<'a, T> {
    /// Enter the default in-memory workspace
    ///
    /// # Errors
    ///
    /// Propagates the toolkit's failure to switch workspace; nothing needs
    /// restoring in that case.
    pub fn acquire(toolkit: &'a mut T) -> Result<Self> {
        Self::acquire_named(toolkit, SCRATCH_WORKSPACE)
    }

    /// Enter a named scratch workspace
    ///
    /// # Errors
    ///
    /// Propagates the toolkit's failure to switch workspace.
    pub fn acquire_named(toolkit: &'a mut T, name: &str) -> Result<Self> {
        let previous = toolkit.workspace();
        toolkit.set_workspace(Some(name.to_string()))?;
        Ok(Self { toolkit, previous })
    }

    /// Workspace that will be restored on drop
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Toolkit access while inside the scratch workspace
    pub fn toolkit(&mut self) -> &mut T {
        &mut *self.toolkit
    }

    /// Delete every feature class, then every table, in the workspace
    ///
    /// Returns the number of datasets deleted.
    ///
    /// # Errors
    ///
    /// Stops at the first listing or deletion failure.
    pub fn clear(&mut self) -> Result<usize> {
        let mut deleted = 0;
        for kind in [DatasetKind::FeatureClass, DatasetKind::Table] {
            for name in self.toolkit.list_datasets(kind)? {
                self.toolkit.delete_dataset(&name)?;
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}

impl<T: GisToolkit + ?Sized> Drop for ScratchWorkspace<'_, T> {
    fn drop(&mut self) {
        if let Err(err) = self.toolkit.set_workspace(self.previous.take()) {
            tracing::warn!(
                op = "restore_workspace",
                error = %err,
                "failed to restore workspace after scratch use"
            );
        }
    }
}

/// Delete all in-memory datasets, leaving the current workspace unchanged
///
/// # Errors
///
/// Propagates toolkit failures; the original workspace is restored either
/// way.
pub fn clear_scratch<T: GisToolkit + ?Sized>(toolkit: &mut T) -> Result<usize> {
    let started = Instant::now();
    log_op_start!("clear_scratch");

    let result = ScratchWorkspace::acquire(toolkit).and_then(|mut scratch| scratch.clear());

    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(deleted) => {
            log_op_end!("clear_scratch", duration_ms = duration_ms, deleted = *deleted as u64);
        }
        Err(err) => {
            log_op_error!("clear_scratch", err, duration_ms = duration_ms);
        }
    }
    result
}
