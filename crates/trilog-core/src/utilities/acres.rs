//! Acreage attribute maintenance

use crate::errors::Result;
use crate::toolkit::{FieldSpec, FieldType, GisToolkit};

/// Name given to a newly added acreage field
pub const ACRES_FIELD: &str = "ACRES";

/// Toolkit expression computing a feature's geometry area in acres
pub const ACRES_EXPRESSION: &str = "!shape.area@ACRES!";

/// Make sure `table` has an acreage field and recalculate it
///
/// An existing field named `acres` in any letter case is reused; otherwise
/// a `DOUBLE(15, 2)` field named `ACRES` is added. Returns the field name.
///
/// # Errors
///
/// Propagates toolkit failures.
pub fn ensure_acres_field<T: GisToolkit + ?Sized>(toolkit: &mut T, table: &str) -> Result<String> {
    let existing = toolkit
        .list_fields(table)?
        .into_iter()
        .find(|name| name.eq_ignore_ascii_case(ACRES_FIELD));

    let field = match existing {
        Some(name) => name,
        None => {
            let spec = FieldSpec::new(ACRES_FIELD, FieldType::Double).with_precision(15, 2);
            toolkit.add_field(table, &spec)?;
            tracing::debug!(op = "ensure_acres_field", table, "added acres field");
            ACRES_FIELD.to_string()
        }
    };

    toolkit.calculate_field(table, &field, ACRES_EXPRESSION)?;
    Ok(field)
}
