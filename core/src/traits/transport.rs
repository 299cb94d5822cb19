//! The boundary to the database driver.
//!
//! The core only needs "execute this SQL text, stream rows back". Each
//! resource is released when dropped, so a connection opened for one call is
//! closed on every exit path of that call.

use crate::{config::ConnectionConfig, error::Result, value::Slot};

/// Opens connections to the database server.
pub trait Transport {
    type Connection: Connection;

    fn open(&self, config: &ConnectionConfig) -> Result<Self::Connection>;
}

/// An open connection.
pub trait Connection {
    type Statement<'c>: Statement
    where
        Self: 'c;

    fn prepare(&mut self, sql: &str) -> Result<Self::Statement<'_>>;
}

/// A prepared statement.
pub trait Statement {
    type Cursor<'s>: RowCursor
    where
        Self: 's;

    fn query(&mut self) -> Result<Self::Cursor<'_>>;
}

/// A forward-only cursor over result rows.
pub trait RowCursor {
    /// Advances to the next row; `false` once the rows are exhausted.
    fn next(&mut self) -> Result<bool>;

    /// Reads the current row into `slots`, one per selected column.
    ///
    /// Unmapped slots still consume their column. Implementations typically
    /// delegate each column to [`fill_slot`](crate::value::fill_slot), which
    /// coerces into the slot's kind and discards unmapped columns.
    fn scan_into(&mut self, slots: &mut [Slot]) -> Result<()>;
}
