//! Insert statement templates
//!
//! Two shapes are produced: natural-key upserts
//! (`INSERT ... VALUES ... ON CONFLICT (<key>) DO UPDATE SET ...`) for tables
//! that carry a unique natural key, and link inserts
//! (`INSERT ... SELECT ... ON CONFLICT DO NOTHING`) for association rows that
//! resolve both sides by name or login at insert time.

use crate::literal::NOW;
use std::fmt;

/// Tables written with a natural-key upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertTable {
    GuardrailPolicy,
    Category,
    Style,
    Feature,
    Region,
    Users,
    SellerProfile,
}

impl UpsertTable {
    /// Every upsertable table
    pub const ALL: [UpsertTable; 7] = [
        UpsertTable::GuardrailPolicy,
        UpsertTable::Category,
        UpsertTable::Style,
        UpsertTable::Feature,
        UpsertTable::Region,
        UpsertTable::Users,
        UpsertTable::SellerProfile,
    ];

    /// Table name in the target schema
    pub fn name(self) -> &'static str {
        match self {
            UpsertTable::GuardrailPolicy => "guardrail_policy",
            UpsertTable::Category => "category",
            UpsertTable::Style => "style",
            UpsertTable::Feature => "feature",
            UpsertTable::Region => "region",
            UpsertTable::Users => "users",
            UpsertTable::SellerProfile => "seller_profile",
        }
    }

    /// Columns of the unique constraint named in `ON CONFLICT`
    pub fn natural_key(self) -> &'static str {
        match self {
            UpsertTable::GuardrailPolicy => "service_area",
            UpsertTable::Category => "type, name",
            UpsertTable::Style | UpsertTable::Feature | UpsertTable::Region => "name",
            UpsertTable::Users => "login_id",
            UpsertTable::SellerProfile => "user_id",
        }
    }

    /// Expression `updated_at` is refreshed with on conflict. The guardrail
    /// table is created here with a second-precision `TIMESTAMP` column.
    pub fn refresh_timestamp(self) -> &'static str {
        match self {
            UpsertTable::GuardrailPolicy => "CURRENT_TIMESTAMP",
            _ => NOW,
        }
    }
}

impl fmt::Display for UpsertTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A multi-row natural-key upsert.
///
/// Conflicting rows have each column in `updates` replaced by the incoming
/// value and `updated_at` refreshed with the table's timestamp expression.
#[derive(Debug, Clone)]
pub struct Upsert<'a> {
    table: UpsertTable,
    columns: &'a [&'a str],
    updates: &'a [&'a str],
    rows: Vec<String>,
}

impl<'a> Upsert<'a> {
    pub fn new(table: UpsertTable, columns: &'a [&'a str], updates: &'a [&'a str]) -> Self {
        Self {
            table,
            columns,
            updates,
            rows: Vec::new(),
        }
    }

    /// Append one row of already-rendered values, in column order
    pub fn row<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        debug_assert_eq!(values.len(), self.columns.len());
        self.rows.push(format!("({})", values.join(", ")));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the statement, or `None` when no rows were added
    pub fn build(&self) -> Option<String> {
        if self.rows.is_empty() {
            return None;
        }
        let mut assignments: Vec<String> = self
            .updates
            .iter()
            .map(|col| format!("    {col} = EXCLUDED.{col}"))
            .collect();
        assignments.push(format!(
            "    updated_at = {}",
            self.table.refresh_timestamp()
        ));

        Some(format!(
            "INSERT INTO {table} ({columns}) VALUES\n{rows}\nON CONFLICT ({key}) DO UPDATE SET\n{assignments};",
            table = self.table,
            columns = self.columns.join(", "),
            rows = self.rows.join(",\n"),
            key = self.table.natural_key(),
            assignments = assignments.join(",\n"),
        ))
    }
}

/// Association insert resolving both sides at insert time.
///
/// `select` lists the projected expressions, `from` the joined tables and
/// `filter` the predicate pinning the parent and child rows.
pub fn link_insert(table: &str, columns: &str, select: &str, from: &str, filter: &str) -> String {
    format!(
        "INSERT INTO {table} ({columns})\nSELECT {select}\nFROM {from}\nWHERE {filter}\nON CONFLICT DO NOTHING;"
    )
}
