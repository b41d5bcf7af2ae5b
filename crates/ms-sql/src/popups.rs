//! Popup statements: the popup row, its thumbnail, and its category, style,
//! and feature associations.
//!
//! Launch windows are not read from the document. They are manufactured from
//! the base date and the popup's position so a seed always contains a spread
//! of past, running, and upcoming popups.

use crate::literal::{optional_literal, quote_literal, NOW};
use crate::upsert::link_insert;
use chrono::{Duration, NaiveDate};
use ms_core::{Catalog, GeoIndex, Popup, RefKind, SeedResult};

/// Length of the cycle start offsets repeat over, in days
pub const START_CYCLE_DAYS: usize = 40;

/// How far before the base date the earliest popup starts, in days
pub const START_LEAD_DAYS: i64 = 10;

/// Shortest popup run, in days
pub const MIN_RUN_DAYS: i64 = 20;

/// Cycle the run length varies over, in days
pub const RUN_CYCLE_DAYS: usize = 10;

/// Approval status for popups that declare none
pub const DEFAULT_APPROVAL_STATUS: &str = "PENDING";

/// Thumbnail rotation, indexed by popup position
pub const THUMBNAIL_IMAGES: [&str; 5] = [
    "https://daitdaing-static-files.s3.ap-northeast-2.amazonaws.com/uploads/34febaa073f4651d36f9e74724d6a847f7b4e87b.png",
    "https://daitdaing-static-files.s3.ap-northeast-2.amazonaws.com/uploads/fb64eb656194ae46b05b2960a9c89215cc09c3de.png",
    "https://daitdaing-static-files.s3.ap-northeast-2.amazonaws.com/uploads/f052ae48a2f8e894c47126c94845d427b18c0f8f.png",
    "https://daitdaing-static-files.s3.ap-northeast-2.amazonaws.com/uploads/e6f688d20f3479754131b0ac7ec700810a7b1265.png",
    "https://daitdaing-static-files.s3.ap-northeast-2.amazonaws.com/uploads/1f65f319fc66053cc771a9875a94d071a6555ce4.png",
];

/// Launch window of one popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Schedule {
    /// Window for the popup at `index` in the document
    pub fn for_index(base: NaiveDate, index: usize) -> Self {
        let offset = (index % START_CYCLE_DAYS) as i64 - START_LEAD_DAYS;
        let start = base + Duration::days(offset);
        let end = start + Duration::days(MIN_RUN_DAYS + (index % RUN_CYCLE_DAYS) as i64);
        Self { start, end }
    }
}

/// Stored popup name; the id suffix keeps names unique for association lookups
pub fn display_name(popup: &Popup) -> String {
    format!("{} (#{})", popup.name, popup.popup_id)
}

/// Description with the seed marker and any event tags appended
pub fn tagged_description(popup: &Popup, marker: &str) -> String {
    let description = popup.description.as_deref().unwrap_or_default();
    if popup.event_tags.is_empty() {
        format!("{description}\n\n{marker}")
    } else {
        format!(
            "{description}\n\n{marker} event_tags: {}",
            popup.event_tags.join(", ")
        )
    }
}

/// Thumbnail URL for the popup at `index`
pub fn thumbnail_for(index: usize) -> &'static str {
    THUMBNAIL_IMAGES[index % THUMBNAIL_IMAGES.len()]
}

/// Everything needed to render the popup at one position
pub struct PopupContext<'a> {
    pub catalog: &'a Catalog,
    pub geo: &'a GeoIndex,
    pub base_date: NaiveDate,
    pub marker: &'a str,
}

/// Statements for the popup at `index`: the popup row, its thumbnail, then
/// its category, style, and feature links
pub fn popup_statements(
    popup: &Popup,
    index: usize,
    ctx: &PopupContext<'_>,
) -> SeedResult<Vec<String>> {
    let name = display_name(popup);
    let owner = format!("popup {}", popup.popup_id);
    let mut statements = vec![
        popup_insert(popup, &name, index, ctx)?,
        image_insert(&name, thumbnail_for(index)),
    ];

    for id in &popup.categories {
        let category = ctx.catalog.require(RefKind::Category, id, &owner)?;
        statements.push(link_insert(
            "popup_category",
            "popup_id, category_id, category_role",
            "p.id, c.id, 'POPUP'",
            "popup p, category c",
            &format!(
                "p.name = {} AND c.name = {}",
                quote_literal(&name),
                quote_literal(category)
            ),
        ));
    }
    for id in &popup.styles {
        let style = ctx.catalog.require(RefKind::Style, id, &owner)?;
        statements.push(link_insert(
            "popup_style",
            "popup_id, style_id",
            "p.id, s.id",
            "popup p, style s",
            &format!(
                "p.name = {} AND s.name = {}",
                quote_literal(&name),
                quote_literal(style)
            ),
        ));
    }
    for id in &popup.features {
        let feature = ctx.catalog.require(RefKind::Feature, id, &owner)?;
        statements.push(link_insert(
            "popup_feature",
            "popup_id, feature_id",
            "p.id, f.id",
            "popup p, feature f",
            &format!(
                "p.name = {} AND f.name = {}",
                quote_literal(&name),
                quote_literal(feature)
            ),
        ));
    }
    Ok(statements)
}

fn popup_insert(
    popup: &Popup,
    name: &str,
    index: usize,
    ctx: &PopupContext<'_>,
) -> SeedResult<String> {
    let cell = ctx.geo.require(&popup.cell_id)?;
    let schedule = Schedule::for_index(ctx.base_date, index);

    Ok(format!(
        "INSERT INTO popup (seller_id, zone_cell_id, name, description, start_date, end_date, operating_time, approval_status, view_count, created_at, updated_at)\n\
         VALUES ((SELECT id FROM users WHERE login_id = {seller}),\n\
         \x20       (SELECT zc.id FROM zone_cell zc JOIN zone_area za ON za.id = zc.zone_area_id WHERE za.name = {zone} AND zc.label = {label} ORDER BY zc.id LIMIT 1),\n\
         \x20       {name},\n\
         \x20       {description},\n\
         \x20       {start},\n\
         \x20       {end},\n\
         \x20       {operating_time},\n\
         \x20       {approval},\n\
         \x20       {views},\n\
         \x20       {NOW}, {NOW});",
        seller = quote_literal(popup.seller_login.as_str()),
        zone = quote_literal(&cell.zone_name),
        label = quote_literal(&cell.label),
        name = quote_literal(name),
        description = quote_literal(&tagged_description(popup, ctx.marker)),
        start = quote_literal(&schedule.start.format("%Y-%m-%d").to_string()),
        end = quote_literal(&schedule.end.format("%Y-%m-%d").to_string()),
        operating_time = optional_literal(popup.operating_time.as_deref()),
        approval = quote_literal(
            popup
                .approval_status
                .as_deref()
                .unwrap_or(DEFAULT_APPROVAL_STATUS)
        ),
        views = popup.view_count.unwrap_or(0),
    ))
}

fn image_insert(name: &str, url: &str) -> String {
    format!(
        "INSERT INTO popup_image (popup_id, image_url, is_thumbnail, created_at)\n\
         SELECT p.id, {url}, TRUE, {NOW}\n\
         FROM popup p WHERE p.name = {name}\n\
         ON CONFLICT DO NOTHING;",
        url = quote_literal(url),
        name = quote_literal(name),
    )
}

#[cfg(test)]
#[path = "popups_test.rs"]
mod tests;
