//! Scoped cleanup of previously seeded rows
//!
//! Reruns must not duplicate data, so the script first deletes what an
//! earlier run created. Rows are in scope when their parent zone is one of
//! the seeded zone names, or when their description carries the seed marker.
//! The marker match is a substring heuristic and is kept as such so the
//! output stays compatible with databases seeded by earlier runs.
//!
//! Deletion runs children before parents: popup detail tables, then popups,
//! then zone availability and cells, then zones.

use crate::literal::{contains_pattern, in_list};
use ms_core::LoginId;

/// Popup detail tables cleared before their parent popups, in order
pub const POPUP_DETAIL_TABLES: [&str; 10] = [
    "popup_category",
    "popup_style",
    "popup_feature",
    "popup_image",
    "review",
    "wishlist",
    "daily_consumer_recommendation",
    "metric_daily_popup",
    "user_reco_dismissal",
    "event_log",
];

/// Consumer preference tables cleared before preferences are re-inserted
pub const PREFERENCE_TABLES: [&str; 4] = [
    "user_pref_category",
    "user_pref_style",
    "user_pref_feature",
    "user_pref_region",
];

fn target_zone_area(names: &str) -> String {
    format!("WITH target_zone_area AS (SELECT id FROM zone_area WHERE name IN ({names}))")
}

fn target_zone_cell() -> &'static str {
    "     target_zone_cell AS (SELECT id FROM zone_cell WHERE zone_area_id IN (SELECT id FROM target_zone_area))"
}

fn target_popups(marker: &str) -> String {
    format!(
        "     target_popups AS (SELECT id FROM popup WHERE zone_cell_id IN (SELECT id FROM target_zone_cell) OR description LIKE {})",
        contains_pattern(marker)
    )
}

/// Delete statements for every row a previous run created under these zones.
///
/// `zone_names` should be sorted and de-duplicated; an empty list matches
/// only marker-tagged popups.
pub fn seed_cleanup(zone_names: &[String], marker: &str) -> Vec<String> {
    let names = in_list(zone_names);
    let popup_scope = format!(
        "{},\n{},\n{}",
        target_zone_area(&names),
        target_zone_cell(),
        target_popups(marker)
    );

    let mut statements: Vec<String> = POPUP_DETAIL_TABLES
        .iter()
        .map(|table| {
            format!(
                "{popup_scope}\nDELETE FROM {table} WHERE popup_id IN (SELECT id FROM target_popups);"
            )
        })
        .collect();

    statements.push(format!(
        "{popup_scope}\nDELETE FROM popup WHERE id IN (SELECT id FROM target_popups);"
    ));
    statements.push(format!(
        "{},\n{}\nDELETE FROM zone_availability WHERE zone_cell_id IN (SELECT id FROM target_zone_cell);",
        target_zone_area(&names),
        target_zone_cell()
    ));
    statements.push(format!(
        "{}\nDELETE FROM zone_cell WHERE zone_area_id IN (SELECT id FROM target_zone_area);",
        target_zone_area(&names)
    ));
    statements.push(format!("DELETE FROM zone_area WHERE name IN ({names});"));
    statements
}

/// Delete statements clearing the preferences of the given consumers.
///
/// Returns nothing when there are no consumers.
pub fn preference_cleanup(logins: &[&LoginId]) -> Vec<String> {
    if logins.is_empty() {
        return Vec::new();
    }
    let logins: Vec<&str> = logins.iter().map(|l| l.as_str()).collect();
    let list = in_list(&logins);
    PREFERENCE_TABLES
        .iter()
        .map(|table| {
            format!(
                "DELETE FROM {table} WHERE user_id IN (SELECT id FROM users WHERE login_id IN ({list}));"
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "cleanup_test.rs"]
mod tests;
