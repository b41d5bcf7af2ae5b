//! SQL literal rendering
//!
//! Values are rendered inline into the generated script, so every string goes
//! through [`quote_literal`] and absent values become `NULL`.

/// Column default used for `created_at` / `updated_at`
pub const NOW: &str = "CURRENT_TIMESTAMP(6)";

/// Escape a SQL string literal value by doubling single quotes.
///
/// This is for use inside single-quoted SQL string literals, not identifiers.
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render a single-quoted string literal.
///
/// # Examples
/// ```
/// use ms_sql::literal::quote_literal;
/// assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
/// ```
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", escape_sql_string(value))
}

/// Render an optional string, `NULL` when absent
pub fn optional_literal(value: Option<&str>) -> String {
    value.map(quote_literal).unwrap_or_else(|| "NULL".to_string())
}

/// Render an optional integer, `NULL` when absent
pub fn optional_number(value: Option<i64>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| "NULL".to_string())
}

/// Render a text array literal.
///
/// An empty list is typed explicitly so the column type is never ambiguous.
///
/// # Examples
/// ```
/// use ms_sql::literal::array_literal;
/// assert_eq!(array_literal(&[]), "ARRAY[]::text[]");
/// assert_eq!(array_literal(&["a".to_string()]), "ARRAY['a']");
/// ```
pub fn array_literal(items: &[String]) -> String {
    if items.is_empty() {
        return "ARRAY[]::text[]".to_string();
    }
    let rendered: Vec<String> = items.iter().map(|i| quote_literal(i)).collect();
    format!("ARRAY[{}]", rendered.join(", "))
}

/// Render the contents of an `IN (...)` list of strings.
///
/// An empty list renders `NULL`, which matches no row.
pub fn in_list<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return "NULL".to_string();
    }
    items
        .iter()
        .map(|i| quote_literal(i.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a `LIKE` pattern matching any value containing `needle`
pub fn contains_pattern(needle: &str) -> String {
    quote_literal(&format!("%{needle}%"))
}
