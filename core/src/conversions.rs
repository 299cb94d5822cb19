use chrono::NaiveDateTime;

use crate::{
    error::{OrmError, Result},
    value::{Value, ValueKind},
};

/// A Rust type that a record field can hold, and how to decode it from a
/// scanned [`Value`].
pub trait ColumnValue: Sized {
    /// The scan slot kind allocated for fields of this type.
    const KIND: ValueKind;

    fn from_value(value: Value) -> Result<Self>;
}

fn mismatch<T>(value: &Value, kind: ValueKind) -> Result<T> {
    Err(OrmError::Mapping(format!(
        "expected a {kind} value, found {value:?}"
    )))
}

macro_rules! impl_column_value_int {
    ($kind:ident, $variant:ident => $($ty:ty),*) => { $(
        impl ColumnValue for $ty {
            const KIND: ValueKind = ValueKind::$kind;

            fn from_value(value: Value) -> Result<Self> {
                match value {
                    Value::$variant(v) => Ok(<$ty>::try_from(v)?),
                    other => mismatch(&other, Self::KIND),
                }
            }
        }
    )* };
}

impl_column_value_int!(Integer, Integer => i8, i16, i32, i64, isize);
impl_column_value_int!(Unsigned, Unsigned => u8, u16, u32, u64, usize);

impl ColumnValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float(v) => Ok(v),
            other => mismatch(&other, Self::KIND),
        }
    }
}

impl ColumnValue for f32 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_value(value: Value) -> Result<Self> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl ColumnValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Text(v) => Ok(v),
            other => mismatch(&other, Self::KIND),
        }
    }
}

impl ColumnValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(v) => Ok(v),
            other => mismatch(&other, Self::KIND),
        }
    }
}

impl ColumnValue for NaiveDateTime {
    const KIND: ValueKind = ValueKind::Timestamp;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            other => mismatch(&other, Self::KIND),
        }
    }
}

// -- Option<T>: NULL-aware wrapper --

impl<T: ColumnValue> ColumnValue for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}
