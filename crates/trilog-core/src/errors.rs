use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TrilogError
pub type Result<T> = std::result::Result<T, TrilogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable in diagnostics events,
/// tests and CLI exit messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    NotFound,
    AlreadyExists,
    ConstraintViolation,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
    ExternalService,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for
/// debugging. Operation errors (`TrilogError`) convert into this shape at
/// diagnostics boundaries.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add destination or folder context
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for trilog operations
#[derive(Error, Debug)]
pub enum TrilogError {
    /// A sink destination or folder could not be opened, read or written
    #[error("I/O failure during {op} on {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration document could not be parsed
    #[error("Invalid configuration{}: {message}", origin_suffix(.origin))]
    Config {
        origin: Option<PathBuf>,
        message: String,
    },

    /// Auxiliary data supplied as text could not be decoded
    #[error("Invalid auxiliary data: {message}")]
    AuxDecode { message: String },

    /// Caller supplied an argument the operation cannot act on
    #[error("Invalid input for {op}: {reason}")]
    InvalidInput { op: &'static str, reason: String },

    /// A named field does not exist on a table
    #[error("Field {field} not found on {table}")]
    FieldNotFound { table: String, field: String },

    /// A field that is about to be added is already present
    #[error("Field {field} already exists on {table}")]
    FieldExists { table: String, field: String },

    /// A named dataset does not exist
    #[error("Dataset {dataset} not found")]
    DatasetNotFound { dataset: String },

    /// An existing attribute domain disagrees with the definition it must have
    #[error("Domain {domain} conflicts: {reason}")]
    DomainConflict { domain: String, reason: String },

    /// The external toolkit rejected a call
    #[error("Toolkit call {op} failed: {message}")]
    Toolkit { op: &'static str, message: String },
}

impl TrilogError {
    /// Build an I/O error bound to the operation and path that produced it
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrilogError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Build a toolkit error
    pub fn toolkit(op: &'static str, message: impl Into<String>) -> Self {
        TrilogError::Toolkit {
            op,
            message: message.into(),
        }
    }
}

fn origin_suffix(origin: &Option<PathBuf>) -> String {
    origin
        .as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Conversion from TrilogError to ExError
///
/// Borrowing form, so callers can emit a diagnostics event and still return
/// the original error.
impl From<&TrilogError> for ExError {
    fn from(err: &TrilogError) -> Self {
        match err {
            TrilogError::Io { op, path, source } => ExError::new(ExErrorKind::Io)
                .with_op(*op)
                .with_path(path.clone())
                .with_message(source.to_string()),

            TrilogError::Config { origin, message } => {
                let ex = ExError::new(ExErrorKind::InvalidConfig)
                    .with_op("load_config")
                    .with_message(message.clone());
                match origin {
                    Some(path) => ex.with_path(path.clone()),
                    None => ex,
                }
            }

            TrilogError::AuxDecode { message } => ExError::new(ExErrorKind::Serialization)
                .with_op("decode_aux")
                .with_message(message.clone()),

            TrilogError::InvalidInput { op, reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_op(*op)
                .with_message(reason.clone()),

            TrilogError::FieldNotFound { table, field } => ExError::new(ExErrorKind::NotFound)
                .with_op("lookup_field")
                .with_message(format!("Field {} not found on {}", field, table)),

            TrilogError::FieldExists { table, field } => ExError::new(ExErrorKind::AlreadyExists)
                .with_op("add_field")
                .with_message(format!("Field {} already exists on {}", field, table)),

            TrilogError::DatasetNotFound { dataset } => ExError::new(ExErrorKind::NotFound)
                .with_op("describe_dataset")
                .with_message(format!("Dataset {} not found", dataset)),

            TrilogError::DomainConflict { domain, reason } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_op("check_domain")
                    .with_message(format!("{}: {}", domain, reason))
            }

            TrilogError::Toolkit { op, message } => ExError::new(ExErrorKind::ExternalService)
                .with_op(*op)
                .with_message(message.clone()),
        }
    }
}

impl From<TrilogError> for ExError {
    fn from(err: TrilogError) -> Self {
        ExError::from(&err)
    }
}
