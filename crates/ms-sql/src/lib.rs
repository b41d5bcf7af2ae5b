//! ms-sql - SQL generation for marketseed
//!
//! Turns a validated seed document into an idempotent SQL script: scoped
//! cleanup of earlier seed rows, natural-key upserts for reference data and
//! accounts, and inserts for zones, cells, popups, and their associations.

pub mod accounts;
pub mod cleanup;
pub mod generate;
pub mod literal;
pub mod popups;
pub mod reference;
pub mod script;
pub mod upsert;
pub mod zones;

pub use generate::{generate, generate_with_coordinates};
pub use script::SeedScript;
pub use upsert::UpsertTable;
