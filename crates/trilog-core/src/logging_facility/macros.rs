//! Operation bracketing macros
//!
//! An instrumented operation emits `start`, then either `end` or
//! `end_error`. Field names come from the schema constants so the capture
//! layer and the JSON output agree on them.

/// Emit the `start` event of `$op`; extra tracing fields may follow
///
/// ```
/// # use trilog_core::log_op_start;
/// log_op_start!("append");
/// log_op_start!("append", sink = "report");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            { $crate::logging_facility::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::logging_facility::schema::FIELD_OP } = $op,
            { $crate::logging_facility::schema::FIELD_EVENT } = $crate::logging_facility::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            { $crate::logging_facility::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::logging_facility::schema::FIELD_OP } = $op,
            { $crate::logging_facility::schema::FIELD_EVENT } = $crate::logging_facility::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Emit the `end` event of `$op` with its elapsed milliseconds
///
/// ```
/// # use trilog_core::log_op_end;
/// log_op_end!("append", duration_ms = 3);
/// log_op_end!("append", duration_ms = 3, bytes = 12u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            { $crate::logging_facility::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::logging_facility::schema::FIELD_OP } = $op,
            { $crate::logging_facility::schema::FIELD_EVENT } = $crate::logging_facility::schema::EVENT_END,
            { $crate::logging_facility::schema::FIELD_DURATION_MS } = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            { $crate::logging_facility::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::logging_facility::schema::FIELD_OP } = $op,
            { $crate::logging_facility::schema::FIELD_EVENT } = $crate::logging_facility::schema::EVENT_END,
            { $crate::logging_facility::schema::FIELD_DURATION_MS } = $duration,
            $($field)*
        );
    };
}

/// Emit the `end_error` event of `$op`
///
/// `$err` converts into `ExError`; `&TrilogError` and `TrilogError` both do.
/// The event carries the error's kind, stable code and message.
///
/// ```
/// # use trilog_core::{log_op_error, errors::TrilogError};
/// let err = TrilogError::toolkit("delete_dataset", "locked");
/// log_op_error!("clear_scratch", &err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            { $crate::logging_facility::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::logging_facility::schema::FIELD_OP } = $op,
            { $crate::logging_facility::schema::FIELD_EVENT } = $crate::logging_facility::schema::EVENT_END_ERROR,
            { $crate::logging_facility::schema::FIELD_DURATION_MS } = $duration,
            { $crate::logging_facility::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::logging_facility::schema::FIELD_ERR_CODE } = ex_err.code(),
            { $crate::logging_facility::schema::FIELD_ERR_MESSAGE } = ex_err.message(),
            $($field)*
        );
    }};
}
