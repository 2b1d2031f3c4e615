//! SQL WHERE clause construction from a value list

use crate::aux_data::Scalar;
use crate::errors::{Result, TrilogError};
use crate::toolkit::GisToolkit;

/// Build `<field> IN(v1, v2, ...)` selecting `values` in `field` of `table`
///
/// The field name is delimited by the toolkit for the table's storage.
/// Values are quoted, with embedded single quotes doubled, when the field
/// holds text; otherwise they are written as-is.
///
/// # Errors
///
/// Returns `TrilogError::InvalidInput` for an empty value list, and
/// propagates toolkit failures (including `FieldNotFound`).
pub fn build_where_clause<T: GisToolkit + ?Sized>(
    toolkit: &T,
    table: &str,
    field: &str,
    values: &[Scalar],
) -> Result<String> {
    if values.is_empty() {
        return Err(TrilogError::InvalidInput {
            op: "build_where_clause",
            reason: format!("no values given for field {}", field),
        });
    }

    let delimited = toolkit.delimit_field(table, field)?;
    let quote = toolkit.field_type(table, field)?.is_text();

    let literals: Vec<String> = values
        .iter()
        .map(|value| {
            if quote {
                format!("'{}'", value.to_string().replace('\'', "''"))
            } else {
                value.to_string()
            }
        })
        .collect();

    Ok(format!("{} IN({})", delimited, literals.join(", ")))
}
