//! Statement assembly for count and paged selects.
//!
//! Paging targets engines with `TOP` but without `OFFSET`/`LIMIT`. Page 1 is a
//! plain `SELECT TOP n`. Later pages emulate an offset with a keyset cursor:
//! take the largest primary key among the first `size * (page - 1)` rows under
//! the same filter and order, then select the next `size` rows whose key is
//! greater. The inner select grows with the page number, so each query costs
//! O(page * size). The cursor compares with `>`, so later pages are only
//! correct when the rows are ordered by ascending primary key.

use crate::{
    expressions::{Condition, Order, order_by_clause, where_clause},
    schema::Schema,
};

/// A fully assembled select for one page of a table.
#[derive(Clone, Copy, Debug)]
pub struct PageSelect<'a> {
    pub table: &'a str,
    pub schema: &'a Schema,
    pub page: u32,
    pub size: u32,
    pub conditions: &'a [Condition],
    pub orders: &'a [Order],
}

impl PageSelect<'_> {
    /// Number of rows the cursor subquery skips. Page 0 is treated as page 1.
    pub fn skip(&self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(self.size)
    }

    pub fn sql(&self) -> String {
        let where_str = where_clause(self.conditions);
        let order_str = order_by_clause(self.orders, self.schema.primary_key());
        let cols = self.schema.select_list();
        let table = self.table;
        let size = self.size;

        if self.page <= 1 {
            return format!("SELECT TOP {size} {cols} FROM {table} {where_str} {order_str}");
        }

        let pk = self.schema.primary_key();
        let skip = self.skip();
        let and_where = match where_str.strip_prefix("WHERE ") {
            Some(terms) => format!("AND {terms}"),
            None => String::new(),
        };

        format!(
            "SELECT TOP {size} {cols} FROM {table} WHERE ({pk} > (SELECT MAX({pk}) FROM \
             (SELECT TOP {skip} {pk} FROM {table} {where_str} {order_str}) AS T) \
             {and_where}){order_str}"
        )
    }
}

/// `SELECT COUNT(<pk>) FROM <table> <where>`
pub fn count_select(table: &str, schema: &Schema, conditions: &[Condition]) -> String {
    format!(
        "SELECT COUNT({}) FROM {} {}",
        schema.primary_key(),
        table,
        where_clause(conditions)
    )
}
