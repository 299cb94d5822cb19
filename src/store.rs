use core::marker::PhantomData;

use topn_core::{
    Condition, Connection, ConnectionConfig, Materializer, Order, OrmError, PageSelect, Record,
    Result, RowCursor, Schema, Statement, Transport, count_select, row,
};

/// Binds one record shape to one table and runs queries against it.
///
/// Every call opens its own connection, runs a single statement, drains the
/// rows and releases everything before returning. Query methods take
/// `&mut self` because they overwrite [`DataStore::last_sql`].
///
/// Each operation comes in two forms: `try_*` returns the failure, the plain
/// form logs it and degrades to `0` or an empty `Vec`.
#[derive(Debug)]
pub struct DataStore<R, T> {
    table: String,
    schema: Schema,
    config: ConnectionConfig,
    transport: T,
    last_sql: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record, T: Transport> DataStore<R, T> {
    pub fn new(table: impl Into<String>, config: ConnectionConfig, transport: T) -> Self {
        Self {
            table: table.into(),
            schema: Schema::of::<R>(),
            config,
            transport,
            last_sql: String::new(),
            _record: PhantomData,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// The statement most recently built by a query call, whether or not it
    /// reached the server.
    pub fn last_sql(&self) -> &str {
        &self.last_sql
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Counts the rows matching `conditions`.
    pub fn try_count_by_condition(&mut self, conditions: &[Condition]) -> Result<i64> {
        self.last_sql = count_select(&self.table, &self.schema, conditions);
        self.dispatch(|cursor| row::scalar(cursor))
    }

    /// Like [`try_count_by_condition`](Self::try_count_by_condition), but a
    /// failure is logged and reported as `0`.
    pub fn count_by_condition(&mut self, conditions: &[Condition]) -> i64 {
        let outcome = self.try_count_by_condition(conditions);
        soften("count", outcome, 0)
    }

    /// Fetches page `page` (1-based) of `size` rows matching `conditions`,
    /// sorted by `orders` or by the primary key when none is usable.
    pub fn try_by_page_condition_order(
        &mut self,
        page: u32,
        size: u32,
        conditions: &[Condition],
        orders: &[Order],
    ) -> Result<Vec<R>> {
        topn_core::topn_trace_page!(page, size, conditions.len(), orders.len());

        self.last_sql = PageSelect {
            table: &self.table,
            schema: &self.schema,
            page,
            size,
            conditions,
            orders,
        }
        .sql();

        let materializer = Materializer::new(&self.schema);
        self.dispatch(|cursor| materializer.collect(cursor))
    }

    /// Like [`try_by_page_condition_order`](Self::try_by_page_condition_order),
    /// but a failure is logged and reported as an empty page. Rows decoded
    /// before the failure are discarded.
    pub fn by_page_condition_order(
        &mut self,
        page: u32,
        size: u32,
        conditions: &[Condition],
        orders: &[Order],
    ) -> Vec<R> {
        let outcome = self.try_by_page_condition_order(page, size, conditions, orders);
        soften("page", outcome, Vec::new())
    }

    /// Sends `last_sql` through a fresh connection and hands the row cursor to
    /// `read`. Connection, statement and cursor are dropped on every path.
    fn dispatch<O>(&self, read: impl FnOnce(&mut dyn RowCursor) -> Result<O>) -> Result<O> {
        topn_core::topn_trace_query!(self.last_sql, self.table);

        let mut conn = self.transport.open(&self.config)?;
        let mut stmt = conn.prepare(&self.last_sql)?;
        let mut cursor = stmt.query()?;
        read(&mut cursor)
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn soften<O>(op: &'static str, outcome: Result<O>, fallback: O) -> O {
    outcome.unwrap_or_else(|err: OrmError| {
        topn_core::topn_trace_failure!(op, err);
        fallback
    })
}
