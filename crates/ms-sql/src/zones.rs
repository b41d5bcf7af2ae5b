//! Zone and cell statements.
//!
//! Zones and cells have no natural-key constraint in the target schema; they
//! are plain inserts that rely on the scoped cleanup having removed any rows
//! a previous run created.

use crate::literal::{optional_literal, optional_number, quote_literal, NOW};
use ms_core::{Catalog, CellGeo, RefId, RefKind, SeedResult, Zone};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// Status assigned to zones that do not declare one
pub const DEFAULT_ZONE_STATUS: &str = "AVAILABLE";

/// Owner assigned to cells that declare none
pub const FALLBACK_CELL_OWNER: &str = "seller1";

/// JSON document stored in `zone_area.geometry_data`
#[derive(Debug, Serialize)]
struct ZoneGeometry<'a> {
    seed_ref: &'a str,
    source_zone_id: &'a RefId,
    theme: Option<&'a str>,
    features: Vec<&'a str>,
}

/// JSON layout with `", "` and `": "` separators, matching geometry rows
/// written by earlier generator versions
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.begin_array_value(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn geometry_json(geometry: &ZoneGeometry<'_>) -> SeedResult<String> {
    let mut buf = Vec::new();
    geometry.serialize(&mut Serializer::with_formatter(&mut buf, SpacedFormatter))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Insert one zone, resolving its region by name
pub fn zone_insert(zone: &Zone, catalog: &Catalog, seed_tag: &str) -> SeedResult<String> {
    let owner = format!("zone {}", zone.zone_id);
    let region_name = catalog.require(RefKind::Region, &zone.region_id, &owner)?;
    let features = zone
        .features
        .iter()
        .map(|id| catalog.require(RefKind::Feature, id, &owner))
        .collect::<SeedResult<Vec<_>>>()?;
    let geometry = geometry_json(&ZoneGeometry {
        seed_ref: seed_tag,
        source_zone_id: &zone.zone_id,
        theme: zone.theme.as_deref(),
        features,
    })?;

    Ok(format!(
        "INSERT INTO zone_area (region_id, name, geometry_data, status, max_capacity, notice, created_at, updated_at)\n\
         VALUES ((SELECT id FROM region WHERE name = {region}), {name}, {geometry}, {status}, {capacity}, {notice}, {NOW}, {NOW});",
        region = quote_literal(region_name),
        name = quote_literal(&zone.name),
        geometry = quote_literal(&geometry),
        status = quote_literal(zone.status.as_deref().unwrap_or(DEFAULT_ZONE_STATUS)),
        capacity = optional_number(zone.max_capacity),
        notice = optional_literal(zone.notice.as_deref()),
    ))
}

/// Insert one cell at its geocoded position.
///
/// The notice falls back to the zone notice and always ends with the seed
/// marker so later runs can find the row.
pub fn cell_insert(zone: &Zone, cell: &CellGeo, marker: &str) -> String {
    let owner = cell
        .owner_login
        .as_ref()
        .map(|l| l.as_str())
        .unwrap_or(FALLBACK_CELL_OWNER);
    let notice = if cell.notice.is_empty() {
        zone.notice.as_deref().unwrap_or_default()
    } else {
        cell.notice.as_str()
    };

    format!(
        "INSERT INTO zone_cell (zone_area_id, owner_id, label, detailed_address, lat, lng, status, max_capacity, notice, created_at, updated_at)\n\
         VALUES ((SELECT id FROM zone_area WHERE name = {zone}), (SELECT id FROM users WHERE login_id = {owner}), {label}, {address}, {lat}, {lng}, {status}, {capacity}, {notice}, {NOW}, {NOW});",
        zone = quote_literal(&zone.name),
        owner = quote_literal(owner),
        label = quote_literal(&cell.label),
        address = quote_literal(&format!("{} {}", zone.name, cell.label)),
        lat = cell.coordinate.lat,
        lng = cell.coordinate.lng,
        status = quote_literal(&cell.status),
        capacity = cell.max_capacity,
        notice = quote_literal(&format!("{notice} {marker}")),
    )
}

#[cfg(test)]
#[path = "zones_test.rs"]
mod tests;
