//! Decoding of result rows into records.
//!
//! ```text
//! Schema ──allocate──▶ slots ──RowCursor::scan_into──▶ slots ──decode──▶ R
//! ```
//!
//! Every row is decoded into a freshly constructed `R`, so no state carries
//! over from one row to the next.

use smallvec::SmallVec;

use crate::{
    error::Result,
    schema::Schema,
    traits::{Record, RowCursor},
    value::{Slot, Value, ValueKind},
};

/// Typed destination slots for one row, one per selected column.
pub type Slots = SmallVec<[Slot; 8]>;

/// Decodes rows for one schema.
#[derive(Clone, Copy, Debug)]
pub struct Materializer<'s> {
    schema: &'s Schema,
}

impl<'s> Materializer<'s> {
    pub const fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Allocates one slot per column, typed by the field's value kind.
    /// Unmapped fields get a slot that discards its column.
    pub fn allocate(&self) -> Slots {
        self.schema
            .fields()
            .iter()
            .map(|field| {
                self.schema
                    .kind_of(field)
                    .unwrap_or(ValueKind::Unmapped)
                    .slot()
            })
            .collect()
    }

    /// Builds a new `R` from scanned slots.
    pub fn decode<R: Record>(&self, slots: Slots) -> Result<R> {
        let mut record = R::default();
        for (index, slot) in slots.into_iter().enumerate() {
            if let Some(value) = slot.into_value() {
                record.set_field(index, value)?;
            }
        }
        Ok(record)
    }

    /// Drains `cursor`, decoding every row. Stops at the first failing row.
    pub fn collect<R: Record, C: RowCursor + ?Sized>(&self, cursor: &mut C) -> Result<Vec<R>> {
        let mut records = Vec::new();
        while cursor.next()? {
            let mut slots = self.allocate();
            cursor.scan_into(&mut slots)?;
            records.push(self.decode(slots)?);
        }
        Ok(records)
    }
}

/// Reads the first column of the first row as an integer. No rows reads as 0.
pub fn scalar<C: RowCursor + ?Sized>(cursor: &mut C) -> Result<i64> {
    if !cursor.next()? {
        return Ok(0);
    }
    let mut slot = [ValueKind::Integer.slot()];
    cursor.scan_into(&mut slot)?;
    match slot[0].value() {
        Value::Integer(count) => Ok(*count),
        _ => Ok(0),
    }
}
