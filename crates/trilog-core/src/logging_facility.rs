//! trilog's own diagnostics, distinct from the multi-sink logger
//!
//! `init` picks a subscriber profile once per process, the `log_op_*`
//! macros bracket instrumented operations, and `test_capture` records
//! events for assertions. Subscriber output goes to stderr so it never
//! mixes with console-sink lines on stdout.
//!
//! ```rust
//! use trilog_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
pub use trilog_core_types::schema;
