//! Boundary to the external GIS toolkit
//!
//! The toolkit's data model is opaque here: tables, datasets and workspaces
//! are plain names, and every call may fail with `TrilogError::Toolkit`.
//! A binding to a concrete toolkit implements `GisToolkit`.

use crate::errors::Result;

/// Dataset families that can live in a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    FeatureClass,
    Table,
}

/// Attribute field storage type as reported by the toolkit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Text,
    ShortInteger,
    LongInteger,
    Float,
    Double,
    Date,
    Other(String),
}

impl FieldType {
    /// Whether values of this type are written as quoted SQL literals
    pub fn is_text(&self) -> bool {
        matches!(self, FieldType::Text)
    }
}

/// Definition of a field to add to a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    /// Maximum length of a text field
    pub length: Option<u32>,
    pub alias: Option<String>,
    pub nullable: bool,
    /// Attribute domain constraining the field's values
    pub domain: Option<String>,
}

impl FieldSpec {
    /// Nullable field with no alias, domain or size hints
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            precision: None,
            scale: None,
            length: None,
            alias: None,
            nullable: true,
            domain: None,
        }
    }

    #[must_use]
    pub fn with_precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Geometry family of a feature dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeType {
    Point,
    Multipoint,
    Polyline,
    Polygon,
    Other(String),
}

/// What the toolkit reports about an existing dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetDescription {
    /// `None` for non-spatial tables
    pub shape_type: Option<ShapeType>,
    /// Stored as a shapefile, directly or behind a layer
    pub is_shapefile: bool,
    /// Full catalog path, e.g. `C:/data/site.gdb/survey/points`
    pub catalog_path: String,
}

impl DatasetDescription {
    /// Whether the dataset is published through a feature service
    pub fn is_service(&self) -> bool {
        self.catalog_path.contains("/rest/services")
    }
}

/// Allowed values of an attribute domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainValues {
    /// Code and description pairs
    Coded(Vec<(i64, String)>),
    /// Inclusive range
    Range { min: i64, max: i64 },
}

/// Attribute domain stored in a geodatabase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub name: String,
    pub description: String,
    pub field_type: FieldType,
    pub values: DomainValues,
}

/// Operations the helpers need from the toolkit
pub trait GisToolkit {
    /// Current workspace, if any is set
    fn workspace(&self) -> Option<String>;

    /// Replace the current workspace; `None` clears it
    fn set_workspace(&mut self, workspace: Option<String>) -> Result<()>;

    /// Names of datasets of `kind` in the current workspace
    fn list_datasets(&self, kind: DatasetKind) -> Result<Vec<String>>;

    fn delete_dataset(&mut self, name: &str) -> Result<()>;

    /// Describe a dataset or layer; `None` if it does not exist
    fn describe_dataset(&self, name: &str) -> Result<Option<DatasetDescription>>;

    /// Field name wrapped in the delimiters the table's storage expects
    fn delimit_field(&self, table: &str, field: &str) -> Result<String>;

    /// Type of `field`; `TrilogError::FieldNotFound` if absent
    fn field_type(&self, table: &str, field: &str) -> Result<FieldType>;

    fn list_fields(&self, table: &str) -> Result<Vec<String>>;

    fn add_field(&mut self, table: &str, spec: &FieldSpec) -> Result<()>;

    /// Recalculate `field` for every row from a toolkit expression
    fn calculate_field(&mut self, table: &str, field: &str, expression: &str) -> Result<()>;

    /// Attribute domains defined in `geodatabase`
    fn list_domains(&self, geodatabase: &str) -> Result<Vec<Domain>>;

    /// Create `domain`, with all its values, in `geodatabase`
    fn create_domain(&mut self, geodatabase: &str, domain: &Domain) -> Result<()>;
}
