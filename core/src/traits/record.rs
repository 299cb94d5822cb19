use crate::{error::Result, value::Value, value::ValueKind};

/// Static description of one record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name as declared on the record.
    pub name: &'static str,
    /// Column name; empty means the column shares the field's name.
    pub column: &'static str,
    pub kind: ValueKind,
    pub primary: bool,
}

impl FieldDef {
    pub const fn new(
        name: &'static str,
        column: &'static str,
        kind: ValueKind,
        primary: bool,
    ) -> Self {
        Self {
            name,
            column,
            kind,
            primary,
        }
    }

    /// The column this field maps to.
    pub const fn column_name(&self) -> &'static str {
        if self.column.is_empty() {
            self.name
        } else {
            self.column
        }
    }
}

/// A table-backed record shape.
///
/// Usually derived with `#[derive(Record)]`, but a hand-written impl works the
/// same way:
///
/// ```ignore
/// impl Record for Catalog {
///     const FIELDS: &'static [FieldDef] = &[
///         FieldDef::new("id", "ID", ValueKind::Integer, true),
///         FieldDef::new("title", "Title", ValueKind::Text, false),
///     ];
///
///     fn set_field(&mut self, index: usize, value: Value) -> Result<()> {
///         match index {
///             0 => self.id = ColumnValue::from_value(value)?,
///             1 => self.title = ColumnValue::from_value(value)?,
///             _ => {}
///         }
///         Ok(())
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a table-backed record",
    label = "this type does not implement Record",
    note = "derive #[derive(Record)] or implement Record by hand"
)]
pub trait Record: Default + Sized {
    /// Fields in declaration order.
    const FIELDS: &'static [FieldDef];

    /// Writes a decoded column value into the field at `index` of
    /// [`Record::FIELDS`]. Indices of unmapped fields are ignored.
    fn set_field(&mut self, index: usize, value: Value) -> Result<()>;
}
