//! Deterministic synthetic geocoding for zones and cells
//!
//! Every region has a fixed base coordinate. The Nth zone declared within a
//! region is offset from that base by N zone steps, and the Mth cell within
//! a zone by M cell steps. Results are rounded to six decimal places, so the
//! same document always yields the same coordinates.

use crate::document::Zone;
use crate::error::{SeedError, SeedResult};
use crate::login_id::LoginId;
use crate::ref_id::RefId;
use std::collections::{BTreeMap, HashMap};

pub const ZONE_LAT_STEP: f64 = 0.008;
pub const ZONE_LNG_STEP: f64 = 0.008;
pub const CELL_LAT_STEP: f64 = 0.0007;
pub const CELL_LNG_STEP: f64 = 0.0007;

/// Status assigned to cells that do not declare one
pub const DEFAULT_CELL_STATUS: &str = "APPROVED";

/// Capacity assigned to cells that declare none (or zero)
pub const DEFAULT_CELL_CAPACITY: i64 = 10;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Round both components to six decimal places
    pub fn rounded(self) -> Self {
        Self {
            lat: round6(self.lat),
            lng: round6(self.lng),
        }
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Base coordinate for every known region
#[derive(Debug, Clone)]
pub struct RegionCoordinates(BTreeMap<RefId, Coordinate>);

impl Default for RegionCoordinates {
    fn default() -> Self {
        Self::from_pairs([
            ("gwangju_dong", Coordinate::new(35.1450, 126.9230)),
            ("gwangju_seo", Coordinate::new(35.1540, 126.8780)),
            ("gwangju_nam", Coordinate::new(35.1320, 126.9030)),
            ("gwangju_buk", Coordinate::new(35.1720, 126.9050)),
            ("gwangju_gwangsan", Coordinate::new(35.1380, 126.7930)),
        ])
    }
}

impl RegionCoordinates {
    /// Build a coordinate table from `(region id, base)` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Coordinate)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(id, coord)| (RefId::from(id), coord))
                .collect(),
        )
    }

    /// Base coordinate of a region
    pub fn base(&self, region: &RefId) -> Option<Coordinate> {
        self.0.get(region).copied()
    }

    /// Regions among `regions` that have no base coordinate, in input order
    pub fn missing<'a>(&self, regions: impl IntoIterator<Item = &'a RefId>) -> Vec<&'a RefId> {
        regions
            .into_iter()
            .filter(|id| !self.0.contains_key(*id))
            .collect()
    }
}

/// Position and resolved attributes of one cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellGeo {
    pub zone_id: RefId,
    pub zone_name: String,
    pub label: String,
    pub coordinate: Coordinate,
    pub owner_login: Option<LoginId>,
    pub status: String,
    pub max_capacity: i64,
    pub notice: String,
}

/// Cell id to geo record lookup
#[derive(Debug, Clone, Default)]
pub struct GeoIndex {
    cells: HashMap<RefId, CellGeo>,
}

impl GeoIndex {
    /// Geo record for a cell
    pub fn cell(&self, id: &RefId) -> Option<&CellGeo> {
        self.cells.get(id)
    }

    /// Geo record for a cell, failing if the cell was never geocoded
    pub fn require(&self, id: &RefId) -> SeedResult<&CellGeo> {
        self.cell(id)
            .ok_or_else(|| SeedError::UngeocodedCell { cell: id.clone() })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Assign coordinates to every cell of every zone.
///
/// Zone ordinals are counted per region in declaration order; cell ordinals
/// are positions within the zone's cell list.
pub fn geocode(zones: &[Zone], coords: &RegionCoordinates) -> SeedResult<GeoIndex> {
    let mut zone_index_by_region: HashMap<&RefId, u32> = HashMap::new();
    let mut index = GeoIndex::default();

    for zone in zones {
        let base = coords
            .base(&zone.region_id)
            .ok_or_else(|| SeedError::MissingRegionCoordinates {
                regions: zone.region_id.to_string(),
            })?;

        let ordinal = zone_index_by_region.entry(&zone.region_id).or_insert(0);
        let zone_idx = f64::from(*ordinal);
        *ordinal += 1;

        let zone_lat = base.lat + zone_idx * ZONE_LAT_STEP;
        let zone_lng = base.lng + zone_idx * ZONE_LNG_STEP;

        for (idx, cell) in zone.cells.iter().enumerate() {
            let idx = idx as f64;
            let coordinate = Coordinate::new(
                zone_lat + idx * CELL_LAT_STEP,
                zone_lng + idx * CELL_LNG_STEP,
            )
            .rounded();

            index.cells.insert(
                cell.cell_id.clone(),
                CellGeo {
                    zone_id: zone.zone_id.clone(),
                    zone_name: zone.name.clone(),
                    label: cell.label.clone(),
                    coordinate,
                    owner_login: cell.owner_login.clone(),
                    status: cell
                        .status
                        .clone()
                        .unwrap_or_else(|| DEFAULT_CELL_STATUS.to_string()),
                    max_capacity: cell
                        .max_capacity
                        .filter(|c| *c != 0)
                        .unwrap_or(DEFAULT_CELL_CAPACITY),
                    notice: cell.notice.clone().unwrap_or_default(),
                },
            );
        }
    }

    log::debug!("Geocoded {} cells across {} zones", index.len(), zones.len());
    Ok(index)
}

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;
