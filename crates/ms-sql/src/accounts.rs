//! Account statements: seller and consumer users, seller profiles, and
//! consumer preferences.

use crate::literal::{optional_literal, optional_number, quote_literal, NOW};
use crate::upsert::{link_insert, Upsert, UpsertTable};
use ms_core::{Catalog, Consumer, RefKind, SeedResult, Seller};

/// bcrypt hash shared by every seeded account
pub const PASSWORD_HASH: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

/// Mail domain for derived account emails
pub const EMAIL_DOMAIN: &str = "itdaing.com";

/// Introduction used when a seller declares none
pub const DEFAULT_SELLER_INTRO: &str = "광주 지역 플리마켓 셀러";

/// Region name for sellers without an activity region, and the region every
/// consumer prefers
pub const HOME_REGION: &str = "광주";

const SELLER_COLUMNS: [&str; 8] = [
    "login_id",
    "password",
    "name",
    "nickname",
    "email",
    "role",
    "created_at",
    "updated_at",
];

const SELLER_UPDATES: [&str; 5] = ["password", "name", "nickname", "email", "role"];

const CONSUMER_COLUMNS: [&str; 10] = [
    "login_id",
    "password",
    "name",
    "nickname",
    "email",
    "age_group",
    "mbti",
    "role",
    "created_at",
    "updated_at",
];

const CONSUMER_UPDATES: [&str; 7] = [
    "password",
    "name",
    "nickname",
    "email",
    "age_group",
    "mbti",
    "role",
];

fn user_subquery(login: &str) -> String {
    format!("(SELECT id FROM users WHERE login_id = {})", quote_literal(login))
}

/// Upsert the user rows of every seller
pub fn seller_users(sellers: &[Seller]) -> Option<String> {
    sellers
        .iter()
        .fold(
            Upsert::new(UpsertTable::Users, &SELLER_COLUMNS, &SELLER_UPDATES),
            |upsert, seller| {
                upsert.row([
                    quote_literal(seller.login_id.as_str()),
                    quote_literal(PASSWORD_HASH),
                    quote_literal(&seller.name),
                    quote_literal(&seller.name),
                    quote_literal(&seller.login_id.email(EMAIL_DOMAIN)),
                    "'SELLER'".to_string(),
                    NOW.to_string(),
                    NOW.to_string(),
                ])
            },
        )
        .build()
}

/// Upsert a seller's profile keyed by its user row.
///
/// Activity region and specialty resolve to names when they are declared
/// ids, and pass through verbatim otherwise.
pub fn seller_profile(seller: &Seller, catalog: &Catalog) -> Option<String> {
    let intro = seller
        .intro
        .as_deref()
        .filter(|i| !i.is_empty())
        .unwrap_or(DEFAULT_SELLER_INTRO);
    let activity_region = match &seller.activity_region {
        Some(id) => catalog
            .name(RefKind::Region, id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string()),
        None => HOME_REGION.to_string(),
    };
    let specialty = match &seller.specialty {
        Some(id) => catalog
            .name(RefKind::Category, id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string()),
        None => String::new(),
    };

    Upsert::new(
        UpsertTable::SellerProfile,
        &[
            "user_id",
            "introduction",
            "activity_region",
            "category",
            "contact_phone",
            "created_at",
            "updated_at",
        ],
        &["introduction", "activity_region", "category"],
    )
    .row([
        user_subquery(seller.login_id.as_str()),
        quote_literal(intro),
        quote_literal(&activity_region),
        quote_literal(&specialty),
        "NULL".to_string(),
        NOW.to_string(),
        NOW.to_string(),
    ])
    .build()
}

/// Upsert the user rows of every consumer
pub fn consumer_users(consumers: &[Consumer]) -> Option<String> {
    consumers
        .iter()
        .fold(
            Upsert::new(UpsertTable::Users, &CONSUMER_COLUMNS, &CONSUMER_UPDATES),
            |upsert, consumer| {
                let name = consumer.display_name();
                upsert.row([
                    quote_literal(consumer.login_id.as_str()),
                    quote_literal(PASSWORD_HASH),
                    quote_literal(name),
                    quote_literal(name),
                    quote_literal(&consumer.login_id.email(EMAIL_DOMAIN)),
                    optional_number(consumer.age_group),
                    optional_literal(consumer.mbti_code().as_deref()),
                    "'CONSUMER'".to_string(),
                    NOW.to_string(),
                    NOW.to_string(),
                ])
            },
        )
        .build()
}

/// Preference rows for one consumer: favourite categories, favourite styles,
/// and the home region
pub fn consumer_preferences(consumer: &Consumer, catalog: &Catalog) -> SeedResult<Vec<String>> {
    let login = quote_literal(consumer.login_id.as_str());
    let owner = format!("consumer {}", consumer.login_id);
    let mut statements = Vec::new();

    for id in &consumer.favorite_categories {
        let name = catalog.require(RefKind::Category, id, &owner)?;
        statements.push(link_insert(
            "user_pref_category",
            "user_id, category_id",
            "u.id, c.id",
            "users u, category c",
            &format!("u.login_id = {login} AND c.name = {}", quote_literal(name)),
        ));
    }
    for id in &consumer.favorite_styles {
        let name = catalog.require(RefKind::Style, id, &owner)?;
        statements.push(link_insert(
            "user_pref_style",
            "user_id, style_id",
            "u.id, s.id",
            "users u, style s",
            &format!("u.login_id = {login} AND s.name = {}", quote_literal(name)),
        ));
    }
    statements.push(link_insert(
        "user_pref_region",
        "user_id, region_id",
        "u.id, r.id",
        "users u, region r",
        &format!("u.login_id = {login} AND r.name = {}", quote_literal(HOME_REGION)),
    ));
    Ok(statements)
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
