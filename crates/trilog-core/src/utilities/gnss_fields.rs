//! GNSS receiver metadata fields
//!
//! Field-collection apps fill a fixed set of `ESRIGNSS_*` attributes from a
//! connected receiver. `add_gnss_fields` prepares a point feature class for
//! that: it makes sure the three supporting domains exist in the parent
//! geodatabase, then adds all fourteen fields.

use crate::errors::{Result, TrilogError};
use crate::toolkit::{Domain, DomainValues, FieldSpec, FieldType, GisToolkit, ShapeType};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

pub const FIX_TYPE_DOMAIN: &str = "ESRI_FIX_TYPE_DOMAIN";
pub const NUM_SATS_DOMAIN: &str = "ESRI_NUM_SATS_DOMAIN";
pub const STATION_ID_DOMAIN: &str = "ESRI_STATION_ID_DOMAIN";

/// Names of the fields added, in creation order
pub const GNSS_FIELD_NAMES: [&str; 14] = [
    "ESRIGNSS_RECEIVER",
    "ESRIGNSS_H_RMS",
    "ESRIGNSS_V_RMS",
    "ESRIGNSS_LATITUDE",
    "ESRIGNSS_LONGITUDE",
    "ESRIGNSS_ALTITUDE",
    "ESRIGNSS_PDOP",
    "ESRIGNSS_HDOP",
    "ESRIGNSS_VDOP",
    "ESRIGNSS_FIXTYPE",
    "ESRIGNSS_CORRECTIONAGE",
    "ESRIGNSS_STATIONID",
    "ESRIGNSS_NUMSATS",
    "ESRIGNSS_FIXDATETIME",
];

const GEODATABASE_EXTENSIONS: [&str; 3] = [".gdb", ".mdb", ".sde"];

/// What `add_gnss_fields` changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GnssFieldsOutcome {
    /// Geodatabase whose domains were checked; `None` for service layers
    pub geodatabase: Option<String>,
    /// Domains that had to be created
    pub created_domains: Vec<String>,
    pub fields_added: usize,
}

/// Definitions of the fourteen GNSS fields, all nullable
pub fn gnss_field_specs() -> Vec<FieldSpec> {
    let double = |name: &str, alias: &str| FieldSpec::new(name, FieldType::Double).with_alias(alias);
    let short = |name: &str, alias: &str, domain: &str| {
        FieldSpec::new(name, FieldType::ShortInteger)
            .with_alias(alias)
            .with_domain(domain)
    };

    vec![
        FieldSpec::new("ESRIGNSS_RECEIVER", FieldType::Text)
            .with_length(50)
            .with_alias("Receiver Name"),
        double("ESRIGNSS_H_RMS", "Horizontal Accuracy (m)"),
        double("ESRIGNSS_V_RMS", "Vertical Accuracy (m)"),
        double("ESRIGNSS_LATITUDE", "Latitude"),
        double("ESRIGNSS_LONGITUDE", "Longitude"),
        double("ESRIGNSS_ALTITUDE", "Altitude"),
        double("ESRIGNSS_PDOP", "PDOP"),
        double("ESRIGNSS_HDOP", "HDOP"),
        double("ESRIGNSS_VDOP", "VDOP"),
        short("ESRIGNSS_FIXTYPE", "Fix Type", FIX_TYPE_DOMAIN),
        double("ESRIGNSS_CORRECTIONAGE", "Correction Age"),
        short("ESRIGNSS_STATIONID", "Station ID", STATION_ID_DOMAIN),
        short("ESRIGNSS_NUMSATS", "Number of Satellites", NUM_SATS_DOMAIN),
        FieldSpec::new("ESRIGNSS_FIXDATETIME", FieldType::Date).with_alias("Fix Time"),
    ]
}

/// The domains the GNSS fields refer to
pub fn gnss_domains() -> Vec<Domain> {
    vec![
        Domain {
            name: FIX_TYPE_DOMAIN.to_string(),
            description: "Fix Type".to_string(),
            field_type: FieldType::ShortInteger,
            values: DomainValues::Coded(vec![
                (0, "Fix not valid".to_string()),
                (1, "GPS".to_string()),
                (2, "Differential GPS".to_string()),
                (4, "RTK Fixed".to_string()),
                (5, "RTK Float".to_string()),
            ]),
        },
        Domain {
            name: NUM_SATS_DOMAIN.to_string(),
            description: "Number of Satellites".to_string(),
            field_type: FieldType::ShortInteger,
            values: DomainValues::Range { min: 0, max: 99 },
        },
        Domain {
            name: STATION_ID_DOMAIN.to_string(),
            description: "Station ID".to_string(),
            field_type: FieldType::ShortInteger,
            values: DomainValues::Range { min: 0, max: 1023 },
        },
    ]
}

fn parent_of(path: &str) -> &str {
    path.rfind(|c: char| c == '/' || c == '\\')
        .map_or("", |i| &path[..i])
}

fn is_geodatabase(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    GEODATABASE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Geodatabase holding the dataset at `catalog_path`
///
/// The dataset's parent when that is a `.gdb`, `.mdb` or `.sde` workspace,
/// otherwise the grandparent (the dataset sits in a feature dataset).
pub fn geodatabase_of(catalog_path: &str) -> &str {
    let parent = parent_of(catalog_path);
    if is_geodatabase(parent) {
        parent
    } else {
        parent_of(parent)
    }
}

/// Check an existing domain against its required definition
fn check_domain(existing: &Domain, required: &Domain) -> Result<()> {
    let conflict = |reason: String| TrilogError::DomainConflict {
        domain: required.name.clone(),
        reason,
    };

    match (&existing.values, &required.values) {
        (DomainValues::Coded(have), DomainValues::Coded(need)) => {
            let missing: Vec<i64> = need
                .iter()
                .map(|(code, _)| *code)
                .filter(|code| !have.iter().any(|(c, _)| c == code))
                .collect();
            if missing.is_empty() {
                Ok(())
            } else {
                Err(conflict(format!("missing coded values {:?}", missing)))
            }
        }
        (
            DomainValues::Range { min, max },
            DomainValues::Range {
                min: need_min,
                max: need_max,
            },
        ) => {
            if min == need_min && max == need_max {
                Ok(())
            } else {
                Err(conflict(format!(
                    "range is {}..={}, expected {}..={}",
                    min, max, need_min, need_max
                )))
            }
        }
        _ => Err(conflict("domain is of the wrong type".to_string())),
    }
}

/// Validate existing domains, then create the missing ones
///
/// Nothing is created when any existing domain conflicts.
fn reconcile_domains<T: GisToolkit + ?Sized>(toolkit: &mut T, geodatabase: &str) -> Result<Vec<String>> {
    let existing = toolkit.list_domains(geodatabase)?;
    let mut missing = Vec::new();

    for required in gnss_domains() {
        match existing.iter().find(|d| d.name == required.name) {
            Some(found) => check_domain(found, &required)?,
            None => missing.push(required),
        }
    }

    let mut created = Vec::with_capacity(missing.len());
    for domain in missing {
        toolkit.create_domain(geodatabase, &domain)?;
        tracing::debug!(op = "add_gnss_fields", geodatabase, domain = %domain.name, "created domain");
        created.push(domain.name);
    }
    Ok(created)
}

fn add_fields_to<T: GisToolkit + ?Sized>(toolkit: &mut T, layer: &str) -> Result<GnssFieldsOutcome> {
    let description = toolkit
        .describe_dataset(layer)?
        .ok_or_else(|| TrilogError::DatasetNotFound {
            dataset: layer.to_string(),
        })?;

    if description.shape_type != Some(ShapeType::Point) {
        return Err(TrilogError::InvalidInput {
            op: "add_gnss_fields",
            reason: format!("{} is not a point layer", layer),
        });
    }
    if description.is_shapefile {
        return Err(TrilogError::InvalidInput {
            op: "add_gnss_fields",
            reason: format!("{} is a shapefile; shapefiles are not supported", layer),
        });
    }

    if let Some(clash) = toolkit.list_fields(layer)?.into_iter().find(|name| {
        GNSS_FIELD_NAMES
            .iter()
            .any(|gnss| gnss.eq_ignore_ascii_case(name))
    }) {
        return Err(TrilogError::FieldExists {
            table: layer.to_string(),
            field: clash,
        });
    }

    let (geodatabase, created_domains) = if description.is_service() {
        (None, Vec::new())
    } else {
        let gdb = geodatabase_of(&description.catalog_path).to_string();
        let created = reconcile_domains(toolkit, &gdb)?;
        (Some(gdb), created)
    };

    let specs = gnss_field_specs();
    for spec in &specs {
        toolkit.add_field(layer, spec)?;
    }

    Ok(GnssFieldsOutcome {
        geodatabase,
        created_domains,
        fields_added: specs.len(),
    })
}

/// Add the GNSS metadata fields to a point feature class
///
/// # Errors
///
/// - `TrilogError::DatasetNotFound` if `layer` does not exist
/// - `TrilogError::InvalidInput` if it is not a point layer, or is a shapefile
/// - `TrilogError::FieldExists` if any GNSS field is already present
///   (names compare case-insensitively)
/// - `TrilogError::DomainConflict` if a supporting domain exists with other
///   values
///
/// All checks run before the first change. Toolkit failures while creating
/// domains or fields propagate and may leave earlier additions in place.
pub fn add_gnss_fields<T: GisToolkit + ?Sized>(toolkit: &mut T, layer: &str) -> Result<GnssFieldsOutcome> {
    let started = Instant::now();
    log_op_start!("add_gnss_fields", layer);

    let result = add_fields_to(toolkit, layer);

    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(outcome) => {
            log_op_end!(
                "add_gnss_fields",
                duration_ms = duration_ms,
                layer,
                fields_added = outcome.fields_added as u64,
                domains_created = outcome.created_domains.len() as u64
            );
        }
        Err(err) => {
            log_op_error!("add_gnss_fields", err, duration_ms = duration_ms, layer);
        }
    }
    result
}
