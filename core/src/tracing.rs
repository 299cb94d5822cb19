//! Tracing utilities for query observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site. The feature must also exist on the calling crate, since
//! the `cfg` is evaluated where the macro expands.

/// Emit a debug-level tracing event with the SQL text and target table.
///
/// ```ignore
/// topn_trace_query!(&sql, store.table_name());
/// ```
#[macro_export]
macro_rules! topn_trace_query {
    ($sql:expr, $table:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %$sql, table = %$table, "topn.query");
    };
}

/// Emit a debug-level tracing event describing a page request.
///
/// ```ignore
/// topn_trace_page!(page, size, conditions.len(), orders.len());
/// ```
#[macro_export]
macro_rules! topn_trace_page {
    ($page:expr, $size:expr, $conditions:expr, $orders:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            page = $page,
            size = $size,
            conditions = $conditions,
            orders = $orders,
            "topn.page"
        );
    };
}

/// Emit a warn-level tracing event for an operation that was degraded to an
/// empty or zero result.
///
/// ```ignore
/// topn_trace_failure!("count", &err);
/// ```
#[macro_export]
macro_rules! topn_trace_failure {
    ($op:expr, $err:expr) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(op = $op, stage = $err.stage(), error = %$err, "topn.failure");
    };
}
