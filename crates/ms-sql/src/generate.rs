//! Load-to-script pipeline
//!
//! Indexes the document, validates it, geocodes its cells, and emits every
//! statement in dependency order. Nothing is rendered unless the whole
//! document validates.

use crate::accounts::{consumer_preferences, consumer_users, seller_profile, seller_users};
use crate::cleanup::{preference_cleanup, seed_cleanup};
use crate::popups::{popup_statements, PopupContext};
use crate::reference::{category_upsert, guardrail_table, guardrail_upsert, named_upsert};
use crate::script::SeedScript;
use crate::upsert::UpsertTable;
use crate::zones::{cell_insert, zone_insert};
use ms_core::{geocode, validate, Catalog, Config, RegionCoordinates, SeedDocument, SeedResult};

/// Build the seed script using the built-in region coordinates
pub fn generate(document: &SeedDocument, config: &Config) -> SeedResult<SeedScript> {
    generate_with_coordinates(document, config, &RegionCoordinates::default())
}

/// Build the seed script against an explicit region coordinate table
pub fn generate_with_coordinates(
    document: &SeedDocument,
    config: &Config,
    coords: &RegionCoordinates,
) -> SeedResult<SeedScript> {
    let catalog = Catalog::build(document);
    validate(document, &catalog, coords)?;
    let geo = geocode(&document.zones, coords)?;
    let marker = config.seed_marker();

    let mut script = SeedScript::new(&config.source_name());

    script.extend(seed_cleanup(&document.zone_names(), &marker));

    script.push(guardrail_table());
    script.push_opt(guardrail_upsert(&document.guardrails));
    script.push_opt(category_upsert(&document.categories));
    script.push_opt(named_upsert(
        UpsertTable::Style,
        document.styles.iter().map(|s| s.name.as_str()),
    ));
    script.push_opt(named_upsert(
        UpsertTable::Feature,
        document.features.iter().map(|f| f.name.as_str()),
    ));
    script.push_opt(named_upsert(
        UpsertTable::Region,
        document.regions.iter().map(|r| r.name.as_str()),
    ));

    script.push_opt(seller_users(&document.sellers));
    for seller in &document.sellers {
        script.push_opt(seller_profile(seller, &catalog));
    }

    script.push_opt(consumer_users(&document.consumers));
    script.extend(preference_cleanup(&document.consumer_logins()));
    for consumer in &document.consumers {
        script.extend(consumer_preferences(consumer, &catalog)?);
    }

    for zone in &document.zones {
        script.push(zone_insert(zone, &catalog, &config.seed_tag)?);
        for cell in &zone.cells {
            script.push(cell_insert(zone, geo.require(&cell.cell_id)?, &marker));
        }
    }

    let ctx = PopupContext {
        catalog: &catalog,
        geo: &geo,
        base_date: config.base_date,
        marker: &marker,
    };
    for (index, popup) in document.popups.iter().enumerate() {
        script.extend(popup_statements(popup, index, &ctx)?);
    }

    log::info!(
        "Built seed script with {} statements",
        script.statements().len()
    );
    Ok(script)
}
