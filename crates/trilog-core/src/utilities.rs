//! Script helpers
//!
//! File discovery works on the local filesystem; the other helpers act
//! through a `GisToolkit`.

pub mod acres;
pub mod find_files;
pub mod gnss_fields;
pub mod scratch;
pub mod where_clause;

pub use acres::{ensure_acres_field, ACRES_EXPRESSION, ACRES_FIELD};
pub use find_files::find_files;
pub use gnss_fields::{add_gnss_fields, GnssFieldsOutcome, GNSS_FIELD_NAMES};
pub use scratch::{clear_scratch, ScratchWorkspace, SCRATCH_WORKSPACE};
pub use where_clause::build_where_clause;
