use super::*;
use ms_core::{geocode, RefId, RegionCoordinates, SeedDocument, SeedError};

const MARKER: &str = "[seed:itdaing_json]";

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 8).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn document() -> SeedDocument {
    SeedDocument::parse(
        r#"{
          "categories": [{"category_id": 1, "name": "Crafts", "type": "POPUP"}],
          "styles": [{"style_id": 10, "name": "Cozy"}],
          "features": [{"feature_id": 100, "name": "Parking"}],
          "regions": [{"region_id": "gwangju_dong", "name": "Dong-gu"}],
          "sellers": [{"login_id": "seller1", "name": "Kim"}],
          "zones": [{"zone_id": "z1", "name": "Riverside", "region_id": "gwangju_dong",
                     "cells": [{"cell_id": "c1", "label": "A-1", "owner_login": "seller1"}]}],
          "popups": [{
            "popup_id": 7, "name": "Kim's Candles", "description": "Soy candles",
            "event_tags": ["workshop", "night"], "seller_login": "seller1",
            "zone_id": "z1", "cell_id": "c1",
            "categories": [1], "styles": [10], "features": [100],
            "operating_time": "11:00-20:00", "approval_status": "APPROVED", "view_count": 42
          }],
          "guardrails": {"service_area": "market"}
        }"#,
        "inline",
    )
    .unwrap()
}

#[test]
fn test_schedule_cycle() {
    assert_eq!(
        Schedule::for_index(base(), 0),
        Schedule {
            start: date(2025, 10, 29),
            end: date(2025, 11, 18),
        }
    );
    assert_eq!(
        Schedule::for_index(base(), 13),
        Schedule {
            start: date(2025, 11, 11),
            end: date(2025, 12, 4),
        }
    );
    // Start offsets repeat every 40 popups, run lengths every 10
    assert_eq!(
        Schedule::for_index(base(), 45),
        Schedule {
            start: date(2025, 11, 3),
            end: date(2025, 11, 28),
        }
    );
}

#[test]
fn test_schedule_is_never_shorter_than_minimum() {
    for index in 0..120 {
        let schedule = Schedule::for_index(base(), index);
        let days = (schedule.end - schedule.start).num_days();
        assert!((20..30).contains(&days), "index {index} ran {days} days");
    }
}

#[test]
fn test_thumbnail_rotation() {
    assert_eq!(thumbnail_for(0), THUMBNAIL_IMAGES[0]);
    assert_eq!(thumbnail_for(4), THUMBNAIL_IMAGES[4]);
    assert_eq!(thumbnail_for(5), THUMBNAIL_IMAGES[0]);
    assert_eq!(thumbnail_for(12), THUMBNAIL_IMAGES[2]);
}

#[test]
fn test_display_name_and_description() {
    let doc = document();
    let popup = &doc.popups[0];
    assert_eq!(display_name(popup), "Kim's Candles (#7)");
    assert_eq!(
        tagged_description(popup, MARKER),
        "Soy candles\n\n[seed:itdaing_json] event_tags: workshop, night"
    );

    let mut untagged = popup.clone();
    untagged.event_tags.clear();
    untagged.description = None;
    assert_eq!(tagged_description(&untagged, MARKER), "\n\n[seed:itdaing_json]");
}

#[test]
fn test_popup_statements() {
    let doc = document();
    let catalog = Catalog::build(&doc);
    let geo = geocode(&doc.zones, &RegionCoordinates::default()).unwrap();
    let ctx = PopupContext {
        catalog: &catalog,
        geo: &geo,
        base_date: base(),
        marker: MARKER,
    };

    let statements = popup_statements(&doc.popups[0], 1, &ctx).unwrap();
    assert_eq!(statements.len(), 5);

    let popup = &statements[0];
    assert!(popup.starts_with("INSERT INTO popup (seller_id, zone_cell_id, name, "));
    assert!(popup.contains("VALUES ((SELECT id FROM users WHERE login_id = 'seller1'),\n"));
    assert!(popup.contains("WHERE za.name = 'Riverside' AND zc.label = 'A-1' ORDER BY zc.id LIMIT 1),\n"));
    assert!(popup.contains("        'Kim''s Candles (#7)',\n"));
    assert!(popup.contains("        '2025-10-30',\n        '2025-11-20',\n"));
    assert!(popup.contains("        '11:00-20:00',\n        'APPROVED',\n        42,\n"));

    assert!(statements[1].starts_with("INSERT INTO popup_image (popup_id, image_url, is_thumbnail, created_at)\n"));
    assert!(statements[1].contains(THUMBNAIL_IMAGES[1]));
    assert!(statements[2].starts_with("INSERT INTO popup_category (popup_id, category_id, category_role)"));
    assert!(statements[2].contains("p.name = 'Kim''s Candles (#7)' AND c.name = 'Crafts'"));
    assert!(statements[3].contains("AND s.name = 'Cozy'"));
    assert!(statements[4].contains("AND f.name = 'Parking'"));
    assert!(statements[1..].iter().all(|s| s.ends_with("ON CONFLICT DO NOTHING;")));
}

#[test]
fn test_popup_defaults() {
    let mut doc = document();
    doc.popups[0].operating_time = None;
    doc.popups[0].approval_status = None;
    doc.popups[0].view_count = None;
    doc.popups[0].categories.clear();
    doc.popups[0].styles.clear();
    doc.popups[0].features.clear();
    let catalog = Catalog::build(&doc);
    let geo = geocode(&doc.zones, &RegionCoordinates::default()).unwrap();
    let ctx = PopupContext {
        catalog: &catalog,
        geo: &geo,
        base_date: base(),
        marker: MARKER,
    };

    let statements = popup_statements(&doc.popups[0], 0, &ctx).unwrap();
    assert_eq!(statements.len(), 2);
    assert!(statements[0].contains("        NULL,\n        'PENDING',\n        0,\n"));
}

#[test]
fn test_popup_in_ungeocoded_cell() {
    let mut doc = document();
    doc.popups[0].cell_id = RefId::from("c404");
    let catalog = Catalog::build(&doc);
    let geo = geocode(&doc.zones, &RegionCoordinates::default()).unwrap();
    let ctx = PopupContext {
        catalog: &catalog,
        geo: &geo,
        base_date: base(),
        marker: MARKER,
    };

    assert!(matches!(
        popup_statements(&doc.popups[0], 0, &ctx),
        Err(SeedError::UngeocodedCell { .. })
    ));
}
