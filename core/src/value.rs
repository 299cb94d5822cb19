//! Column value kinds and the scanned values that flow between a row cursor
//! and a record.

use chrono::{NaiveDate, NaiveDateTime};
use core::fmt;

use crate::error::{OrmError, Result};

/// Formats accepted when a timestamp arrives as text.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Date-only text (`DATE` columns) reads as midnight.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The kind of value a record field holds.
///
/// `Unmapped` fields are still selected, but their column is never decoded and
/// the field keeps its `Default` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Unsigned,
    Float,
    Text,
    Boolean,
    Timestamp,
    Unmapped,
}

impl ValueKind {
    /// Allocates the destination slot for this kind, initialized to the zero
    /// value.
    pub fn slot(self) -> Slot {
        Slot::new(self)
    }

    fn zero(self) -> Value {
        match self {
            Self::Integer => Value::Integer(0),
            Self::Unsigned => Value::Unsigned(0),
            Self::Float => Value::Float(0.0),
            Self::Text => Value::Text(String::new()),
            Self::Boolean => Value::Boolean(false),
            Self::Timestamp => Value::Timestamp(NaiveDateTime::default()),
            Self::Unmapped => Value::Null,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Unsigned => "unsigned",
            Self::Float => "float",
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
            Self::Unmapped => "unmapped",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scanned column value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Timestamp(NaiveDateTime),
}

impl Value {
    /// The kind this value belongs to, or `None` for `Null`.
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Null => None,
            Self::Integer(_) => Some(ValueKind::Integer),
            Self::Unsigned(_) => Some(ValueKind::Unsigned),
            Self::Float(_) => Some(ValueKind::Float),
            Self::Text(_) => Some(ValueKind::Text),
            Self::Boolean(_) => Some(ValueKind::Boolean),
            Self::Timestamp(_) => Some(ValueKind::Timestamp),
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts this value into `kind`, applying the coercions a SQL Server
    /// driver commonly needs (`BIT` as integer, `DATETIME` as text, ...).
    pub fn coerce(self, kind: ValueKind) -> Result<Value> {
        if self.is_null() || self.kind() == Some(kind) {
            return Ok(self);
        }

        let coerced = match (kind, &self) {
            (ValueKind::Integer, Value::Unsigned(v)) => Some(Value::Integer(i64::try_from(*v)?)),
            (ValueKind::Integer, Value::Boolean(v)) => Some(Value::Integer(i64::from(*v))),
            (ValueKind::Integer, Value::Text(s)) => s.trim().parse().ok().map(Value::Integer),
            (ValueKind::Unsigned, Value::Integer(v)) => Some(Value::Unsigned(u64::try_from(*v)?)),
            (ValueKind::Unsigned, Value::Text(s)) => s.trim().parse().ok().map(Value::Unsigned),
            (ValueKind::Float, Value::Integer(v)) => Some(Value::Float(*v as f64)),
            (ValueKind::Float, Value::Unsigned(v)) => Some(Value::Float(*v as f64)),
            (ValueKind::Float, Value::Text(s)) => s.trim().parse().ok().map(Value::Float),
            (ValueKind::Boolean, Value::Integer(0)) | (ValueKind::Boolean, Value::Unsigned(0)) => {
                Some(Value::Boolean(false))
            }
            (ValueKind::Boolean, Value::Integer(1)) | (ValueKind::Boolean, Value::Unsigned(1)) => {
                Some(Value::Boolean(true))
            }
            (ValueKind::Boolean, Value::Text(s)) => parse_bool(s).map(Value::Boolean),
            (ValueKind::Timestamp, Value::Text(s)) => parse_timestamp(s).map(Value::Timestamp),
            (ValueKind::Text, Value::Integer(v)) => Some(Value::Text(v.to_string())),
            (ValueKind::Text, Value::Unsigned(v)) => Some(Value::Text(v.to_string())),
            (ValueKind::Text, Value::Float(v)) => Some(Value::Text(v.to_string())),
            (ValueKind::Text, Value::Boolean(v)) => Some(Value::Text(v.to_string())),
            (ValueKind::Text, Value::Timestamp(ts)) => Some(Value::Text(ts.to_string())),
            _ => None,
        };

        coerced.ok_or_else(|| {
            OrmError::RowScan(format!("cannot scan {:?} into a {kind} slot", self))
        })
    }
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// A typed scan destination for one column.
///
/// The kind is fixed when the slot is allocated. Scanning a NULL keeps the
/// kind, so a reused slot still rejects values it cannot coerce.
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    kind: ValueKind,
    value: Value,
}

impl Slot {
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            value: kind.zero(),
        }
    }

    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// `false` for unmapped fields, whose column is read and discarded.
    pub fn is_mapped(&self) -> bool {
        self.kind != ValueKind::Unmapped
    }

    /// The scanned value, or `None` for an unmapped slot.
    pub fn into_value(self) -> Option<Value> {
        self.is_mapped().then_some(self.value)
    }
}

/// Stores `incoming` into a pre-allocated scan slot, coercing it to the
/// slot's kind.
///
/// Unmapped slots silently discard the column.
pub fn fill_slot(slot: &mut Slot, incoming: Value) -> Result<()> {
    if !slot.is_mapped() {
        return Ok(());
    }
    slot.value = incoming.coerce(slot.kind)?;
    Ok(())
}
