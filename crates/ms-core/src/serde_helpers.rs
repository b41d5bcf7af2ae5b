//! Shared serde helper functions used by the document model.

use crate::login_id::LoginId;
use serde::{Deserialize, Deserializer};

/// Deserialize an optional login, treating `null` and `""` as absent.
///
/// Cells written by hand frequently carry `"owner_login": ""` for unowned slots.
pub fn optional_login<'de, D>(deserializer: D) -> Result<Option<LoginId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(LoginId::try_new))
}
