//! Identifiers declared by reference collections and seed records.
//!
//! Seed documents mix numeric ids (`"category_id": 3`) and string ids
//! (`"region_id": "gwangju_dong"`). Both are kept as written so that `3` and
//! `"3"` stay distinct, the same way a JSON object lookup would treat them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric or textual identifier as declared in the seed document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefId {
    /// Integer identifier
    Number(i64),
    /// String identifier
    Text(String),
}

impl fmt::Display for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefId::Number(n) => write!(f, "{n}"),
            RefId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RefId {
    fn from(n: i64) -> Self {
        RefId::Number(n)
    }
}

impl From<&str> for RefId {
    fn from(s: &str) -> Self {
        RefId::Text(s.to_string())
    }
}

impl From<String> for RefId {
    fn from(s: String) -> Self {
        RefId::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_number_and_text() {
        let ids: Vec<RefId> = serde_json::from_str(r#"[3, "gwangju_dong"]"#).unwrap();
        assert_eq!(ids[0], RefId::Number(3));
        assert_eq!(ids[1], RefId::Text("gwangju_dong".to_string()));
    }

    #[test]
    fn test_number_and_text_are_distinct() {
        assert_ne!(RefId::from(3), RefId::from("3"));
    }

    #[test]
    fn test_display() {
        assert_eq!(RefId::from(42).to_string(), "42");
        assert_eq!(RefId::from("z-1").to_string(), "z-1");
    }
}
