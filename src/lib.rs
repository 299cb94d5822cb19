//! # topn
//!
//! A minimal table-backed ORM for SQL engines that page with `TOP` instead of
//! `OFFSET`/`LIMIT`. Describe a table as a plain struct, then run filtered,
//! ordered, paginated queries without hand-writing SQL.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use topn::prelude::*;
//!
//! #[derive(Record, Default, Clone, Debug)]
//! struct Catalog {
//!     #[column(primary, name = "id")]
//!     id: i32,
//!     #[column(name = "title")]
//!     title: String,
//!     description: String,
//! }
//!
//! let config = ConnectionConfig::load_from("topn.toml".as_ref())?;
//! let mut store: DataStore<Catalog, _> = DataStore::new("Catalog", config, transport);
//!
//! let page = store.try_by_page_condition_order(
//!     1,
//!     20,
//!     &[Condition::quoted("title", "=", "test1")],
//!     &[Order::desc("title")],
//! )?;
//! let total = store.try_count_by_condition(&[Condition::quoted("title", "=", "test1")])?;
//! println!("{total} rows, last statement: {}", store.last_sql());
//! ```
//!
//! ## Security
//!
//! Condition names, operators and values are spliced into the SQL text
//! verbatim. Only pass trusted input, or quote string literals with
//! [`Condition::quoted`].

mod store;

pub use store::DataStore;

/// Derive macro generating the [`Record`] descriptor for a struct.
pub use topn_macros::Record;

pub use topn_core::{
    ColumnValue, Condition, Connection, ConnectionConfig, FieldDef, Materializer, Order, OrderBy,
    OrmError, Record, Result, RowCursor, Schema, Slot, Statement, Transport, Value, ValueKind,
    fill_slot,
};

/// Statement and clause builders.
pub mod sql {
    pub use topn_core::expressions::{order_by_clause, where_clause};
    pub use topn_core::schema::select_list;
    pub use topn_core::sql::{PageSelect, count_select};
}

/// Error types
pub mod error {
    pub use topn_core::error::{OrmError, Result};
}

pub mod prelude {
    pub use crate::{
        ColumnValue, Condition, ConnectionConfig, DataStore, Order, OrderBy, OrmError, Record,
        Transport,
    };
}
