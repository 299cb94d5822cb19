/// A filter term: `<name> <compare> <value>`.
///
/// The value is copied into the SQL text verbatim, so string literals must
/// carry their own quotes (see [`Condition::quoted`]). A condition with any
/// empty part is skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Condition {
    pub name: String,
    pub compare: String,
    pub value: String,
}

impl Condition {
    pub fn new(
        name: impl Into<String>,
        compare: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            compare: compare.into(),
            value: value.into(),
        }
    }

    /// Creates a condition whose value is rendered as a SQL string literal,
    /// with embedded single quotes doubled.
    ///
    /// # Example
    /// ```ignore
    /// let cond = Condition::quoted("Title", "=", "O'Brien");
    /// assert_eq!(cond.value, "'O''Brien'");
    /// ```
    pub fn quoted(name: impl Into<String>, compare: impl Into<String>, text: &str) -> Self {
        Self::new(name, compare, format!("'{}'", text.replace('\'', "''")))
    }

    /// Create an equality condition (=)
    pub fn eq(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, "=", value)
    }

    /// Create a LIKE condition
    pub fn like(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, "LIKE", value)
    }

    pub fn is_usable(&self) -> bool {
        !self.name.is_empty() && !self.compare.is_empty() && !self.value.is_empty()
    }
}

/// Builds `WHERE a = 1 AND b LIKE 'x%'` from the usable conditions, in input
/// order. Returns an empty string when none are usable.
pub fn where_clause(conditions: &[Condition]) -> String {
    let mut out = String::new();
    for cond in conditions.iter().filter(|c| c.is_usable()) {
        out.push_str(if out.is_empty() { "WHERE " } else { " AND " });
        out.push_str(&cond.name);
        out.push(' ');
        out.push_str(&cond.compare);
        out.push(' ');
        out.push_str(&cond.value);
    }
    out
}
