//! Filter and sort descriptions, and the WHERE / ORDER BY fragments built
//! from them.
//!
//! Field names, operators and values are inserted into the SQL text
//! verbatim. Never pass untrusted input through these builders: they do not
//! escape or parameterize anything.

pub mod conditions;

use core::fmt;

pub use conditions::{Condition, where_clause};

/// Sort direction for ORDER BY clauses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrderBy {
    #[default]
    Asc,
    Desc,
}

impl OrderBy {
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderBy::Asc => "ASC",
            OrderBy::Desc => "DESC",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort term: `<name> <ASC|DESC>`.
///
/// An order with an empty name is skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Order {
    pub name: String,
    pub by: OrderBy,
}

impl Order {
    pub fn new(name: impl Into<String>, by: OrderBy) -> Self {
        Self {
            name: name.into(),
            by,
        }
    }

    /// Creates an ascending order: "name ASC"
    pub fn asc(name: impl Into<String>) -> Self {
        Self::new(name, OrderBy::Asc)
    }

    /// Creates a descending order: "name DESC"
    pub fn desc(name: impl Into<String>) -> Self {
        Self::new(name, OrderBy::Desc)
    }

    pub fn is_usable(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Builds `ORDER BY a ASC,b DESC` from the usable orders.
///
/// Without any usable order the clause falls back to `ORDER BY <primary_key>`.
/// An empty primary key then yields a bare `ORDER BY `.
pub fn order_by_clause(orders: &[Order], primary_key: &str) -> String {
    let mut out = String::new();
    for order in orders.iter().filter(|o| o.is_usable()) {
        if !out.is_empty() {
            out.push(',');
        }
        out.push_str(&order.name);
        out.push(' ');
        out.push_str(order.by.as_str());
    }

    if out.is_empty() {
        out.push_str(primary_key);
    }

    format!("ORDER BY {out}")
}
