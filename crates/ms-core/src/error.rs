//! Error types for ms-core

use crate::catalog::RefKind;
use crate::ref_id::RefId;
use thiserror::Error;

/// Core error type for marketseed
#[derive(Error, Debug)]
pub enum SeedError {
    /// M001: Seed document not found
    #[error("[M001] Seed source not found: {path}")]
    SourceNotFound { path: String },

    /// M002: Seed document is not valid JSON or does not match the expected shape
    #[error("[M002] Failed to parse seed source {path}: {source}")]
    SourceParse {
        path: String,
        source: serde_json::Error,
    },

    /// M003: IO error with file path context
    #[error("[M003] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// V001: Zone references a region that is not declared
    #[error("[V001] Unknown region_id {region} in zone {zone}")]
    UnknownRegion { region: RefId, zone: RefId },

    /// V002: Cell owner is not a declared seller
    #[error("[V002] Unknown seller login {login} in cell {cell}")]
    UnknownCellOwner { login: String, cell: RefId },

    /// V003: Popup seller is not a declared seller
    #[error("[V003] Unknown seller login {login} in popup {popup}")]
    UnknownPopupSeller { login: String, popup: RefId },

    /// V004: Popup zone is not a declared zone
    #[error("[V004] Unknown zone_id {zone} in popup {popup}")]
    UnknownPopupZone { zone: RefId, popup: RefId },

    /// V005: Popup cell is not a cell of any declared zone
    #[error("[V005] Unknown cell_id {cell} in popup {popup}")]
    UnknownPopupCell { cell: RefId, popup: RefId },

    /// V006: Popup cell exists but belongs to a different zone
    #[error("[V006] Cell {cell} in popup {popup} does not belong to zone {zone}")]
    CellOutsideZone {
        cell: RefId,
        zone: RefId,
        popup: RefId,
    },

    /// V007: Category, style, feature, or region reference that does not resolve
    #[error("[V007] Unknown {kind} {id} in {owner}")]
    UnknownReference {
        kind: RefKind,
        id: RefId,
        owner: String,
    },

    /// V008: Declared regions without a base coordinate
    #[error("[V008] Missing coordinate definitions for regions: {regions}")]
    MissingRegionCoordinates { regions: String },

    /// V009: Cell id declared by more than one zone, or twice in one zone
    #[error("[V009] Cell id {cell} in zone {zone} is already declared in zone {first_zone}")]
    DuplicateCellId {
        cell: RefId,
        zone: RefId,
        first_zone: RefId,
    },

    /// G001: Cell was never assigned a coordinate
    #[error("[G001] Cell {cell} has no geocoded position")]
    UngeocodedCell { cell: RefId },

    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Failed to parse configuration file
    #[error("[C002] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// C003: Invalid configuration value
    #[error("[C003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for SeedError
pub type SeedResult<T> = Result<T, SeedError>;
