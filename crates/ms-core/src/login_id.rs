//! Strongly-typed login identifier shared by sellers and consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty user login id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LoginId(String);

impl<'de> Deserialize<'de> for LoginId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LoginId::try_new(s).ok_or_else(|| serde::de::Error::custom("LoginId must not be empty"))
    }
}

impl LoginId {
    /// Create a new login id, panicking if it is empty.
    ///
    /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
    pub fn new(login: impl Into<String>) -> Self {
        let s = login.into();
        assert!(!s.is_empty(), "LoginId must not be empty");
        Self(s)
    }

    /// Try to create a new login id, returning `None` if it is empty.
    pub fn try_new(login: impl Into<String>) -> Option<Self> {
        let s = login.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Return the login as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derived mailbox used for seeded accounts.
    pub fn email(&self, domain: &str) -> String {
        format!("{}@{}", self.0, domain)
    }
}

impl fmt::Display for LoginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LoginId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for LoginId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LoginId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LoginId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
