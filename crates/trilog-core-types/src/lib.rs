//! Core types shared across trilog facilities
//!
//! This crate provides foundational types used by both the sink layer
//! and the diagnostics facility:
//!
//! - **Sink identifiers**: SinkKind, SinkSelection
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
pub mod sink_kind;

pub use sink_kind::{SinkKind, SinkSelection};
