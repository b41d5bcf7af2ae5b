//! Reference data statements: guardrail policy, categories, styles,
//! features, and regions.

use crate::literal::{array_literal, quote_literal, NOW};
use crate::upsert::{Upsert, UpsertTable};
use ms_core::{Category, GuardrailPolicy};

/// Create the guardrail policy table when the schema does not have it yet
pub fn guardrail_table() -> String {
    [
        "CREATE TABLE IF NOT EXISTS guardrail_policy (",
        "    id SERIAL PRIMARY KEY,",
        "    service_area VARCHAR(255) UNIQUE NOT NULL,",
        "    forbidden_keywords TEXT[] NOT NULL,",
        "    disallowed_topics TEXT[] NOT NULL,",
        "    updated_at TIMESTAMP WITHOUT TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP",
        ");",
    ]
    .join("\n")
}

/// Upsert the guardrail policy keyed by service area
pub fn guardrail_upsert(policy: &GuardrailPolicy) -> Option<String> {
    Upsert::new(
        UpsertTable::GuardrailPolicy,
        &["service_area", "forbidden_keywords", "disallowed_topics"],
        &["forbidden_keywords", "disallowed_topics"],
    )
    .row([
        quote_literal(&policy.service_area),
        array_literal(&policy.forbidden_keywords),
        array_literal(&policy.disallowed_topics),
    ])
    .build()
}

/// Upsert all categories keyed by `(type, name)`
pub fn category_upsert(categories: &[Category]) -> Option<String> {
    categories
        .iter()
        .fold(
            Upsert::new(
                UpsertTable::Category,
                &["name", "type", "created_at", "updated_at"],
                &[],
            ),
            |upsert, c| {
                upsert.row([
                    quote_literal(&c.name),
                    quote_literal(&c.kind),
                    NOW.to_string(),
                    NOW.to_string(),
                ])
            },
        )
        .build()
}

/// Upsert a name-keyed lookup table (style, feature, region)
pub fn named_upsert<'a>(
    table: UpsertTable,
    names: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    names
        .into_iter()
        .fold(
            Upsert::new(table, &["name", "created_at", "updated_at"], &[]),
            |upsert, name| upsert.row([quote_literal(name), NOW.to_string(), NOW.to_string()]),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::RefId;

    #[test]
    fn test_guardrail_upsert() {
        let policy = GuardrailPolicy {
            service_area: "market".to_string(),
            forbidden_keywords: vec!["scam".to_string()],
            disallowed_topics: vec![],
        };
        let sql = guardrail_upsert(&policy).unwrap();
        assert!(sql.starts_with(
            "INSERT INTO guardrail_policy (service_area, forbidden_keywords, disallowed_topics) VALUES\n\
             ('market', ARRAY['scam'], ARRAY[]::text[])"
        ));
        assert!(sql.contains("ON CONFLICT (service_area) DO UPDATE SET"));
        assert!(sql.contains("disallowed_topics = EXCLUDED.disallowed_topics"));
        assert!(sql.ends_with("    updated_at = CURRENT_TIMESTAMP;"));
        assert!(!sql.contains("CURRENT_TIMESTAMP(6)"));
    }

    #[test]
    fn test_guardrail_table_is_idempotent() {
        assert!(guardrail_table().starts_with("CREATE TABLE IF NOT EXISTS guardrail_policy ("));
    }

    #[test]
    fn test_category_upsert() {
        let categories = vec![
            Category {
                id: RefId::from(1),
                name: "Kid's Crafts".to_string(),
                kind: "POPUP".to_string(),
            },
            Category {
                id: RefId::from(2),
                name: "Food".to_string(),
                kind: "POPUP".to_string(),
            },
        ];
        let sql = category_upsert(&categories).unwrap();
        assert!(sql.contains("('Kid''s Crafts', 'POPUP', CURRENT_TIMESTAMP(6), CURRENT_TIMESTAMP(6)),\n"));
        assert!(sql.contains("ON CONFLICT (type, name)"));
    }

    #[test]
    fn test_empty_collections_render_nothing() {
        assert!(category_upsert(&[]).is_none());
        assert!(named_upsert(UpsertTable::Feature, []).is_none());
    }

    #[test]
    fn test_named_upsert() {
        let sql = named_upsert(UpsertTable::Region, ["Dong-gu", "Seo-gu"]).unwrap();
        assert!(sql.starts_with("INSERT INTO region (name, created_at, updated_at) VALUES\n('Dong-gu', "));
        assert!(sql.contains("ON CONFLICT (name)"));
    }
}
