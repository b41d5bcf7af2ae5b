//! Seed document model
//!
//! A seed document is a single JSON file describing the reference data
//! (categories, styles, features, regions), the accounts (sellers and
//! consumers), the zone/cell layout, the popups placed in those cells, and
//! the guardrail policy for the service.

use crate::error::{SeedError, SeedResult};
use crate::login_id::LoginId;
use crate::ref_id::RefId;
use crate::serde_helpers::optional_login;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The full seed document as read from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDocument {
    /// Popup categories
    pub categories: Vec<Category>,

    /// Popup styles
    pub styles: Vec<Style>,

    /// Popup and zone features
    pub features: Vec<Feature>,

    /// Regions zones are placed in
    pub regions: Vec<Region>,

    /// Seller accounts
    pub sellers: Vec<Seller>,

    /// Consumer accounts
    #[serde(default)]
    pub consumers: Vec<Consumer>,

    /// Zones, each with its ordered cells
    pub zones: Vec<Zone>,

    /// Popups, in launch order
    pub popups: Vec<Popup>,

    /// Content guardrail policy for the service
    pub guardrails: GuardrailPolicy,
}

/// A popup category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category_id")]
    pub id: RefId,
    pub name: String,
    /// Category family; together with `name` forms the natural key
    #[serde(rename = "type")]
    pub kind: String,
}

/// A popup style
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    #[serde(rename = "style_id")]
    pub id: RefId,
    pub name: String,
}

/// A popup or zone feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "feature_id")]
    pub id: RefId,
    pub name: String,
}

/// A region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "region_id")]
    pub id: RefId,
    pub name: String,
}

/// A seller account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub login_id: LoginId,
    pub name: String,
    #[serde(default)]
    pub intro: Option<String>,
    /// Region id the seller is active in
    #[serde(default)]
    pub activity_region: Option<RefId>,
    /// Category id the seller specialises in
    #[serde(default)]
    pub specialty: Option<RefId>,
}

/// A consumer account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consumer {
    pub login_id: LoginId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age_group: Option<i64>,
    #[serde(default)]
    pub mbti: Option<String>,
    #[serde(default)]
    pub favorite_categories: Vec<RefId>,
    #[serde(default)]
    pub favorite_styles: Vec<RefId>,
}

impl Consumer {
    /// Display name, falling back to the login id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.login_id.as_str())
    }

    /// Upper-cased MBTI code; blank codes are treated as absent
    pub fn mbti_code(&self) -> Option<String> {
        self.mbti
            .as_deref()
            .map(str::to_uppercase)
            .filter(|code| !code.is_empty())
    }
}

/// A named area within a region, subdivided into cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub zone_id: RefId,
    /// Zone name; used as the natural key by the cleanup statements
    pub name: String,
    pub region_id: RefId,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub features: Vec<RefId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub max_capacity: Option<i64>,
    #[serde(default)]
    pub notice: Option<String>,
    /// Cells in declaration order; the order drives geocoding
    #[serde(default)]
    pub cells: Vec<Cell>,
}

/// An assignable slot within a zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub cell_id: RefId,
    pub label: String,
    #[serde(default, deserialize_with = "optional_login")]
    pub owner_login: Option<LoginId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub max_capacity: Option<i64>,
    #[serde(default)]
    pub notice: Option<String>,
}

/// A time-windowed listing placed in one cell by one seller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Popup {
    pub popup_id: RefId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_tags: Vec<String>,
    pub seller_login: LoginId,
    pub zone_id: RefId,
    pub cell_id: RefId,
    #[serde(default)]
    pub categories: Vec<RefId>,
    #[serde(default)]
    pub styles: Vec<RefId>,
    #[serde(default)]
    pub features: Vec<RefId>,
    #[serde(default)]
    pub operating_time: Option<String>,
    #[serde(default)]
    pub approval_status: Option<String>,
    #[serde(default)]
    pub view_count: Option<i64>,
}

/// Content guardrail policy, one per service area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardrailPolicy {
    pub service_area: String,
    #[serde(default)]
    pub forbidden_keywords: Vec<String>,
    #[serde(default)]
    pub disallowed_topics: Vec<String>,
}

impl SeedDocument {
    /// Load a seed document from a JSON file
    pub fn load(path: &Path) -> SeedResult<Self> {
        if !path.exists() {
            return Err(SeedError::SourceNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SeedError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse a seed document from JSON text; `origin` names the source in errors
    pub fn parse(content: &str, origin: &str) -> SeedResult<Self> {
        serde_json::from_str(content).map_err(|e| SeedError::SourceParse {
            path: origin.to_string(),
            source: e,
        })
    }

    /// Total number of cells across all zones
    pub fn cell_count(&self) -> usize {
        self.zones.iter().map(|z| z.cells.len()).sum()
    }

    /// Zone names, sorted and de-duplicated
    pub fn zone_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.zones.iter().map(|z| z.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Consumer logins, sorted and de-duplicated
    pub fn consumer_logins(&self) -> Vec<&LoginId> {
        let mut logins: Vec<&LoginId> = self.consumers.iter().map(|c| &c.login_id).collect();
        logins.sort();
        logins.dedup();
        logins
    }

    /// Look up a zone by id
    pub fn zone(&self, id: &RefId) -> Option<&Zone> {
        self.zones.iter().find(|z| &z.zone_id == id)
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
