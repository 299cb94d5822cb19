//! Column and primary-key metadata derived from a record shape.

use hashbrown::HashMap;

use crate::{
    traits::{FieldDef, Record},
    value::ValueKind,
};

/// Derived, immutable description of a record's columns.
///
/// `fields()` and `columns()` always have the same length, and index `i` of
/// one corresponds to index `i` of the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<&'static str>,
    columns: Vec<&'static str>,
    primary_key: &'static str,
    kinds: HashMap<&'static str, ValueKind>,
    select_list: String,
}

impl Schema {
    /// Builds the descriptor for `R`.
    pub fn of<R: Record>() -> Self {
        Self::from_fields(R::FIELDS)
    }

    /// Builds a descriptor from field definitions in declaration order.
    ///
    /// The first field flagged as primary key wins; later flags are ignored.
    /// With no flagged field the primary key column is empty.
    pub fn from_fields(defs: &[FieldDef]) -> Self {
        let mut fields = Vec::with_capacity(defs.len());
        let mut columns = Vec::with_capacity(defs.len());
        let mut kinds = HashMap::with_capacity(defs.len());
        let mut primary_key = "";

        for def in defs {
            let column = def.column_name();
            if primary_key.is_empty() && def.primary {
                primary_key = column;
            }
            fields.push(def.name);
            columns.push(column);
            kinds.insert(def.name, def.kind);
        }

        let select_list = select_list(&columns);
        Self {
            fields,
            columns,
            primary_key,
            kinds,
            select_list,
        }
    }

    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn primary_key(&self) -> &'static str {
        self.primary_key
    }

    /// Comma-joined column list used in SELECT statements.
    pub fn select_list(&self) -> &str {
        &self.select_list
    }

    /// Value kind of the named field.
    pub fn kind_of(&self, field: &str) -> Option<ValueKind> {
        self.kinds.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Joins column names with `,`, skipping empty entries.
pub fn select_list<S: AsRef<str>>(columns: &[S]) -> String {
    let mut out = String::new();
    for col in columns.iter().map(AsRef::as_ref) {
        if col.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(',');
        }
        out.push_str(col);
    }
    out
}
