//! ms-core - Core library for marketseed
//!
//! This crate provides the seed document model, the reference catalog built
//! from it, document validation, deterministic geocoding of zones and cells,
//! and the generator configuration shared by the SQL builder and the CLI.

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod geo;
pub mod login_id;
pub mod ref_id;
pub(crate) mod serde_helpers;
pub mod validate;

pub use catalog::{Catalog, RefKind};
pub use config::Config;
pub use document::{
    Category, Cell, Consumer, Feature, GuardrailPolicy, Popup, Region, SeedDocument, Seller,
    Style, Zone,
};
pub use error::{SeedError, SeedResult};
pub use geo::{geocode, CellGeo, Coordinate, GeoIndex, RegionCoordinates};
pub use login_id::LoginId;
pub use ref_id::RefId;
pub use validate::validate;
