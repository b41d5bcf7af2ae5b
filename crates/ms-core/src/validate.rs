//! Seed document validation
//!
//! Confirms that every foreign id in the document resolves before any SQL is
//! built. Validation stops at the first violation; there is no partial mode.
//! Cell ids must be unique across the whole document since popups and the
//! geocoded index address cells by id alone.

use crate::catalog::{Catalog, RefKind};
use crate::document::SeedDocument;
use crate::error::{SeedError, SeedResult};
use crate::geo::RegionCoordinates;
use crate::ref_id::RefId;
use std::collections::HashMap;

/// Validate a document against its catalog and the region coordinate table
pub fn validate(
    document: &SeedDocument,
    catalog: &Catalog,
    coords: &RegionCoordinates,
) -> SeedResult<()> {
    validate_zones(document, catalog)?;
    validate_popups(document, catalog)?;
    validate_consumers(document, catalog)?;
    validate_region_coordinates(catalog, coords)?;

    log::info!(
        "Validated seed document: {} zones, {} cells, {} popups, {} consumers",
        document.zones.len(),
        document.cell_count(),
        document.popups.len(),
        document.consumers.len()
    );
    Ok(())
}

fn require_all(
    catalog: &Catalog,
    kind: RefKind,
    ids: &[RefId],
    owner: impl Fn() -> String,
) -> SeedResult<()> {
    match ids.iter().find(|id| !catalog.contains(kind, id)) {
        Some(id) => Err(SeedError::UnknownReference {
            kind,
            id: id.clone(),
            owner: owner(),
        }),
        None => Ok(()),
    }
}

fn validate_zones(document: &SeedDocument, catalog: &Catalog) -> SeedResult<()> {
    let mut cell_zones: HashMap<&RefId, &RefId> = HashMap::new();

    for zone in &document.zones {
        if !catalog.contains(RefKind::Region, &zone.region_id) {
            return Err(SeedError::UnknownRegion {
                region: zone.region_id.clone(),
                zone: zone.zone_id.clone(),
            });
        }
        require_all(catalog, RefKind::Feature, &zone.features, || {
            format!("zone {}", zone.zone_id)
        })?;

        for cell in &zone.cells {
            if let Some(first_zone) = cell_zones.insert(&cell.cell_id, &zone.zone_id) {
                return Err(SeedError::DuplicateCellId {
                    cell: cell.cell_id.clone(),
                    zone: zone.zone_id.clone(),
                    first_zone: first_zone.clone(),
                });
            }
            if let Some(owner) = &cell.owner_login {
                if !catalog.is_seller(owner.as_str()) {
                    return Err(SeedError::UnknownCellOwner {
                        login: owner.to_string(),
                        cell: cell.cell_id.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn validate_popups(document: &SeedDocument, catalog: &Catalog) -> SeedResult<()> {
    let cell_zones: HashMap<&RefId, &RefId> = document
        .zones
        .iter()
        .flat_map(|z| z.cells.iter().map(move |c| (&c.cell_id, &z.zone_id)))
        .collect();

    for popup in &document.popups {
        if !catalog.is_seller(popup.seller_login.as_str()) {
            return Err(SeedError::UnknownPopupSeller {
                login: popup.seller_login.to_string(),
                popup: popup.popup_id.clone(),
            });
        }
        if document.zone(&popup.zone_id).is_none() {
            return Err(SeedError::UnknownPopupZone {
                zone: popup.zone_id.clone(),
                popup: popup.popup_id.clone(),
            });
        }
        let Some(cell_zone) = cell_zones.get(&popup.cell_id) else {
            return Err(SeedError::UnknownPopupCell {
                cell: popup.cell_id.clone(),
                popup: popup.popup_id.clone(),
            });
        };
        if *cell_zone != &popup.zone_id {
            return Err(SeedError::CellOutsideZone {
                cell: popup.cell_id.clone(),
                zone: popup.zone_id.clone(),
                popup: popup.popup_id.clone(),
            });
        }

        let owner = || format!("popup {}", popup.popup_id);
        require_all(catalog, RefKind::Category, &popup.categories, owner)?;
        require_all(catalog, RefKind::Style, &popup.styles, owner)?;
        require_all(catalog, RefKind::Feature, &popup.features, owner)?;
    }
    Ok(())
}

fn validate_consumers(document: &SeedDocument, catalog: &Catalog) -> SeedResult<()> {
    for consumer in &document.consumers {
        let owner = || format!("consumer {}", consumer.login_id);
        require_all(
            catalog,
            RefKind::Category,
            &consumer.favorite_categories,
            owner,
        )?;
        require_all(catalog, RefKind::Style, &consumer.favorite_styles, owner)?;
    }
    Ok(())
}

fn validate_region_coordinates(catalog: &Catalog, coords: &RegionCoordinates) -> SeedResult<()> {
    let missing = coords.missing(catalog.region_ids());
    if missing.is_empty() {
        return Ok(());
    }
    Err(SeedError::MissingRegionCoordinates {
        regions: missing
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
