//! trilog Core - Multi-sink diagnostic logging for toolkit scripts
//!
//! This crate provides:
//! - A logger that routes a message to a console, a report file and an
//!   optional log file
//! - A tagged auxiliary-data model with an indented text renderer
//! - TOML-backed logger configuration
//! - Small helpers for scripts driving an external GIS toolkit, reached only
//!   through the opaque `GisToolkit` trait

pub mod aux_data;
pub mod config;
pub mod errors;
pub mod logger;
pub mod logging_facility;
pub mod render;
pub mod sink;
pub mod toolkit;
pub mod utilities;

// Re-export commonly used types
pub use aux_data::{AuxValue, Scalar};
pub use config::LoggerConfig;
pub use errors::{ExError, ExErrorKind, Result, TrilogError};
pub use logger::MultiSinkLogger;
pub use sink::{Console, MemoryConsole, StdoutConsole, TracingConsole};
pub use toolkit::{
    DatasetDescription, DatasetKind, Domain, DomainValues, FieldSpec, FieldType, GisToolkit,
    ShapeType,
};
pub use trilog_core_types::{SinkKind, SinkSelection};
