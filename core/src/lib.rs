//! Building blocks for a minimal table-backed ORM: record descriptors, WHERE /
//! ORDER BY / paged statement assembly, the transport boundary and row
//! decoding.

pub mod config;
pub mod conversions;
pub mod error;
pub mod expressions;
pub mod row;
pub mod schema;
pub mod sql;
pub mod tracing;
pub mod traits;
pub mod value;

// Re-export key types and traits
pub use config::ConnectionConfig;
pub use conversions::ColumnValue;
pub use error::{OrmError, Result};
pub use expressions::{Condition, Order, OrderBy, order_by_clause, where_clause};
pub use row::{Materializer, Slots};
pub use schema::{Schema, select_list};
pub use sql::{PageSelect, count_select};
pub use traits::*;
pub use value::{Slot, Value, ValueKind, fill_slot};
