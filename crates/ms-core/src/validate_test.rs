use super::*;

fn document() -> SeedDocument {
    SeedDocument::parse(
        r#"{
          "categories": [{"category_id": 1, "name": "Crafts", "type": "POPUP"}],
          "styles": [{"style_id": 10, "name": "Cozy"}],
          "features": [{"feature_id": 100, "name": "Parking"}],
          "regions": [{"region_id": "gwangju_dong", "name": "Dong-gu"}],
          "sellers": [{"login_id": "seller1", "name": "First"}],
          "consumers": [{"login_id": "user1", "favorite_categories": [1], "favorite_styles": [10]}],
          "zones": [
            {"zone_id": "z1", "name": "Riverside", "region_id": "gwangju_dong", "features": [100],
             "cells": [{"cell_id": "c1", "label": "A-1", "owner_login": "seller1"},
                       {"cell_id": "c2", "label": "A-2"}]},
            {"zone_id": "z2", "name": "Alley", "region_id": "gwangju_dong",
             "cells": [{"cell_id": "c3", "label": "B-1"}]}
          ],
          "popups": [{"popup_id": "p1", "name": "Candle Week", "seller_login": "seller1",
                      "zone_id": "z1", "cell_id": "c1",
                      "categories": [1], "styles": [10], "features": [100]}],
          "guardrails": {"service_area": "market"}
        }"#,
        "inline",
    )
    .unwrap()
}

fn run(doc: &SeedDocument) -> SeedResult<()> {
    validate(doc, &Catalog::build(doc), &RegionCoordinates::default())
}

#[test]
fn test_valid_document_passes() {
    run(&document()).unwrap();
}

#[test]
fn test_unknown_zone_region() {
    let mut doc = document();
    doc.zones[1].region_id = RefId::from("gwangju_nowhere");
    let err = run(&doc).unwrap_err();
    assert_eq!(
        err.to_string(),
        "[V001] Unknown region_id gwangju_nowhere in zone z2"
    );
}

#[test]
fn test_unknown_zone_feature() {
    let mut doc = document();
    doc.zones[0].features.push(RefId::from(404));
    let err = run(&doc).unwrap_err();
    assert_eq!(err.to_string(), "[V007] Unknown feature 404 in zone z1");
}

#[test]
fn test_unknown_cell_owner() {
    let mut doc = document();
    doc.zones[0].cells[1].owner_login = Some(crate::LoginId::new("ghost"));
    let err = run(&doc).unwrap_err();
    assert!(matches!(err, SeedError::UnknownCellOwner { .. }));
    assert!(err.to_string().contains("ghost"));
    assert!(err.to_string().contains("c2"));
}

#[test]
fn test_unknown_popup_seller() {
    let mut doc = document();
    doc.popups[0].seller_login = crate::LoginId::new("user1");
    assert!(matches!(
        run(&doc),
        Err(SeedError::UnknownPopupSeller { .. })
    ));
}

#[test]
fn test_unknown_popup_zone() {
    let mut doc = document();
    doc.popups[0].zone_id = RefId::from("z9");
    assert!(matches!(run(&doc), Err(SeedError::UnknownPopupZone { .. })));
}

#[test]
fn test_unknown_popup_cell() {
    let mut doc = document();
    doc.popups[0].cell_id = RefId::from("c99");
    let err = run(&doc).unwrap_err();
    assert_eq!(err.to_string(), "[V005] Unknown cell_id c99 in popup p1");
}

#[test]
fn test_popup_cell_in_other_zone() {
    let mut doc = document();
    doc.popups[0].cell_id = RefId::from("c3");
    assert!(matches!(run(&doc), Err(SeedError::CellOutsideZone { .. })));
}

#[test]
fn test_cell_id_reused_across_zones() {
    let mut doc = document();
    doc.zones[1].cells[0].cell_id = RefId::from("c1");
    assert_eq!(
        run(&doc).unwrap_err().to_string(),
        "[V009] Cell id c1 in zone z2 is already declared in zone z1"
    );
}

#[test]
fn test_cell_id_reused_within_zone() {
    let mut doc = document();
    doc.zones[0].cells[1].cell_id = RefId::from("c1");
    assert!(matches!(
        run(&doc),
        Err(SeedError::DuplicateCellId { ref zone, ref first_zone, .. })
            if *zone == RefId::from("z1") && *first_zone == RefId::from("z1")
    ));
}

#[test]
fn test_numeric_and_text_cell_ids_are_distinct() {
    let mut doc = document();
    doc.zones[0].cells[1].cell_id = RefId::from(1);
    doc.zones[1].cells[0].cell_id = RefId::from("1");
    run(&doc).unwrap();
}

#[test]
fn test_unknown_popup_references() {
    let mut doc = document();
    doc.popups[0].categories.push(RefId::from(2));
    assert_eq!(
        run(&doc).unwrap_err().to_string(),
        "[V007] Unknown category 2 in popup p1"
    );

    let mut doc = document();
    doc.popups[0].styles = vec![RefId::from("10")];
    assert_eq!(
        run(&doc).unwrap_err().to_string(),
        "[V007] Unknown style 10 in popup p1"
    );

    let mut doc = document();
    doc.popups[0].features.push(RefId::from(101));
    assert!(matches!(
        run(&doc),
        Err(SeedError::UnknownReference {
            kind: RefKind::Feature,
            ..
        })
    ));
}

#[test]
fn test_unknown_consumer_favorite_category() {
    let mut doc = document();
    doc.consumers[0].favorite_categories = vec![RefId::from(999)];
    assert_eq!(
        run(&doc).unwrap_err().to_string(),
        "[V007] Unknown category 999 in consumer user1"
    );
}

#[test]
fn test_unknown_consumer_favorite_style() {
    let mut doc = document();
    doc.consumers[0].favorite_styles.push(RefId::from(11));
    assert!(matches!(
        run(&doc),
        Err(SeedError::UnknownReference {
            kind: RefKind::Style,
            ..
        })
    ));
}

#[test]
fn test_region_without_coordinates() {
    let mut doc = document();
    doc.regions.push(crate::Region {
        id: RefId::from("busan_jung"),
        name: "Jung-gu".to_string(),
    });
    let err = run(&doc).unwrap_err();
    assert_eq!(
        err.to_string(),
        "[V008] Missing coordinate definitions for regions: busan_jung"
    );
}

#[test]
fn test_zones_are_checked_before_popups() {
    let mut doc = document();
    doc.zones[0].region_id = RefId::from("nowhere");
    doc.popups[0].cell_id = RefId::from("c99");
    assert!(matches!(run(&doc), Err(SeedError::UnknownRegion { .. })));
}
