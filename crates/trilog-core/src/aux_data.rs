//! Auxiliary data model
//!
//! Structured values attached to a log message are classified once, when
//! they are built, into `Scalar`, `Sequence` or `Mapping`. The renderer
//! matches on that tag instead of probing values at each recursion step.

use crate::errors::{Result, TrilogError};
use std::collections::BTreeMap;
use std::fmt;

/// A leaf value. Strings are always scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Type tag written under the value's representation line
    pub fn type_tag(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "str",
        }
    }

    // Strings nested inside a container are quoted so `["a, b"]` and
    // `["a", "b"]` stay distinguishable.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => write!(f, "{:?}", s),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{:?}", x),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

/// A value attached to a log message for diagnostic dumping
#[derive(Debug, Clone, PartialEq)]
pub enum AuxValue {
    Scalar(Scalar),
    Sequence(Vec<AuxValue>),
    /// Insertion-ordered key/value pairs
    Mapping(Vec<(String, AuxValue)>),
}

impl AuxValue {
    /// Build a mapping from key/value pairs, keeping their order
    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<AuxValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        AuxValue::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a sequence from any iterable of convertible values
    pub fn sequence<V, I>(items: I) -> Self
    where
        V: Into<AuxValue>,
        I: IntoIterator<Item = V>,
    {
        AuxValue::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn type_tag(&self) -> &'static str {
        match self {
            AuxValue::Scalar(s) => s.type_tag(),
            AuxValue::Sequence(_) => "sequence",
            AuxValue::Mapping(_) => "mapping",
        }
    }

    /// Decode a JSON document into an aux value
    ///
    /// # Errors
    ///
    /// Returns `TrilogError::AuxDecode` when `text` is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str::<serde_json::Value>(text)
            .map(AuxValue::from)
            .map_err(|e| TrilogError::AuxDecode {
                message: e.to_string(),
            })
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuxValue::Scalar(s) => s.fmt_nested(f),
            AuxValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            AuxValue::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: ", key)?;
                    value.fmt_nested(f)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for AuxValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuxValue::Scalar(s) => fmt::Display::fmt(s, f),
            container => container.fmt_nested(f),
        }
    }
}

impl From<Scalar> for AuxValue {
    fn from(value: Scalar) -> Self {
        AuxValue::Scalar(value)
    }
}

impl From<&str> for AuxValue {
    fn from(value: &str) -> Self {
        AuxValue::Scalar(Scalar::Str(value.to_string()))
    }
}

impl From<String> for AuxValue {
    fn from(value: String) -> Self {
        AuxValue::Scalar(Scalar::Str(value))
    }
}

impl From<bool> for AuxValue {
    fn from(value: bool) -> Self {
        AuxValue::Scalar(Scalar::Bool(value))
    }
}

impl From<f64> for AuxValue {
    fn from(value: f64) -> Self {
        AuxValue::Scalar(Scalar::Float(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AuxValue {
                fn from(value: $t) -> Self {
                    AuxValue::Scalar(Scalar::Int(i64::from(value)))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<AuxValue>> From<Option<T>> for AuxValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AuxValue::Scalar(Scalar::Null), Into::into)
    }
}

impl<T: Into<AuxValue>> From<Vec<T>> for AuxValue {
    fn from(value: Vec<T>) -> Self {
        AuxValue::sequence(value)
    }
}

impl<K: Into<String>, V: Into<AuxValue>> From<BTreeMap<K, V>> for AuxValue {
    fn from(value: BTreeMap<K, V>) -> Self {
        AuxValue::mapping(value)
    }
}

impl From<serde_json::Value> for AuxValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => AuxValue::Scalar(Scalar::Null),
            Value::Bool(b) => AuxValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => AuxValue::Scalar(Scalar::Int(i)),
                // u64 beyond i64 and all fractional numbers fall back to f64
                None => AuxValue::Scalar(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            Value::String(s) => AuxValue::Scalar(Scalar::Str(s)),
            Value::Array(items) => AuxValue::sequence(items),
            Value::Object(map) => AuxValue::mapping(map),
        }
    }
}
