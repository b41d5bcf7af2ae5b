//! Reference catalog built from a seed document
//!
//! Indexes the reference collections (categories, styles, features, regions)
//! by their declared ids, plus the set of seller logins, so that validation
//! and statement building can resolve foreign ids to names.

use crate::document::SeedDocument;
use crate::error::{SeedError, SeedResult};
use crate::login_id::LoginId;
use crate::ref_id::RefId;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Kind of reference collection an id points into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Category,
    Style,
    Feature,
    Region,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefKind::Category => write!(f, "category"),
            RefKind::Style => write!(f, "style"),
            RefKind::Feature => write!(f, "feature"),
            RefKind::Region => write!(f, "region"),
        }
    }
}

/// Id to name lookups for every reference collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: BTreeMap<RefId, String>,
    styles: BTreeMap<RefId, String>,
    features: BTreeMap<RefId, String>,
    regions: BTreeMap<RefId, String>,
    seller_logins: BTreeSet<LoginId>,
}

impl Catalog {
    /// Index the reference collections of a document.
    ///
    /// A repeated id keeps the last declared name.
    pub fn build(document: &SeedDocument) -> Self {
        let catalog = Self {
            categories: document
                .categories
                .iter()
                .map(|c| (c.id.clone(), c.name.clone()))
                .collect(),
            styles: document
                .styles
                .iter()
                .map(|s| (s.id.clone(), s.name.clone()))
                .collect(),
            features: document
                .features
                .iter()
                .map(|f| (f.id.clone(), f.name.clone()))
                .collect(),
            regions: document
                .regions
                .iter()
                .map(|r| (r.id.clone(), r.name.clone()))
                .collect(),
            seller_logins: document
                .sellers
                .iter()
                .map(|s| s.login_id.clone())
                .collect(),
        };
        log::debug!(
            "Indexed {} categories, {} styles, {} features, {} regions, {} sellers",
            catalog.categories.len(),
            catalog.styles.len(),
            catalog.features.len(),
            catalog.regions.len(),
            catalog.seller_logins.len()
        );
        catalog
    }

    fn table(&self, kind: RefKind) -> &BTreeMap<RefId, String> {
        match kind {
            RefKind::Category => &self.categories,
            RefKind::Style => &self.styles,
            RefKind::Feature => &self.features,
            RefKind::Region => &self.regions,
        }
    }

    /// Resolve an id to its display name
    pub fn name(&self, kind: RefKind, id: &RefId) -> Option<&str> {
        self.table(kind).get(id).map(String::as_str)
    }

    /// Resolve an id, failing with a descriptive error naming `owner`
    pub fn require(&self, kind: RefKind, id: &RefId, owner: &str) -> SeedResult<&str> {
        self.name(kind, id)
            .ok_or_else(|| SeedError::UnknownReference {
                kind,
                id: id.clone(),
                owner: owner.to_string(),
            })
    }

    /// Whether an id resolves
    pub fn contains(&self, kind: RefKind, id: &RefId) -> bool {
        self.table(kind).contains_key(id)
    }

    /// Declared region ids, in sorted order
    pub fn region_ids(&self) -> impl Iterator<Item = &RefId> {
        self.regions.keys()
    }

    /// Whether a login belongs to a declared seller
    pub fn is_seller(&self, login: &str) -> bool {
        self.seller_logins.contains(login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Category, Region};

    fn document() -> SeedDocument {
        SeedDocument::parse(
            r#"{
              "categories": [{"category_id": 1, "name": "Crafts", "type": "POPUP"},
                             {"category_id": 1, "name": "Handmade", "type": "POPUP"}],
              "styles": [{"style_id": "cozy", "name": "Cozy"}],
              "features": [],
              "regions": [{"region_id": "gwangju_dong", "name": "Dong-gu"}],
              "sellers": [{"login_id": "seller1", "name": "First"}],
              "zones": [],
              "popups": [],
              "guardrails": {"service_area": "market"}
            }"#,
            "inline",
        )
        .unwrap()
    }

    #[test]
    fn test_resolves_names() {
        let catalog = Catalog::build(&document());
        assert_eq!(catalog.name(RefKind::Style, &RefId::from("cozy")), Some("Cozy"));
        assert_eq!(
            catalog.name(RefKind::Region, &RefId::from("gwangju_dong")),
            Some("Dong-gu")
        );
        assert!(catalog.is_seller("seller1"));
        assert!(!catalog.is_seller("seller2"));
    }

    #[test]
    fn test_duplicate_id_keeps_last_name() {
        let catalog = Catalog::build(&document());
        assert_eq!(catalog.name(RefKind::Category, &RefId::from(1)), Some("Handmade"));
    }

    #[test]
    fn test_require_reports_owner() {
        let catalog = Catalog::build(&document());
        let err = catalog
            .require(RefKind::Feature, &RefId::from(9), "popup p1")
            .unwrap_err();
        assert_eq!(err.to_string(), "[V007] Unknown feature 9 in popup p1");
    }

    #[test]
    fn test_kinds_are_separate_namespaces() {
        let mut doc = document();
        doc.categories = vec![Category {
            id: RefId::from(5),
            name: "Food".to_string(),
            kind: "POPUP".to_string(),
        }];
        doc.regions = vec![Region {
            id: RefId::from(6),
            name: "Seo-gu".to_string(),
        }];
        let catalog = Catalog::build(&doc);
        assert!(catalog.contains(RefKind::Category, &RefId::from(5)));
        assert!(!catalog.contains(RefKind::Region, &RefId::from(5)));
        assert_eq!(catalog.region_ids().count(), 1);
    }
}
