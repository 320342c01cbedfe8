//! Error types for configuration and favorites.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration problems surfaced at the point of use.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The angle table has no rows, so no aiming data can be looked up.
    #[error("angle table is empty")]
    EmptyAngleTable,

    /// A pocket id referenced by the caller does not exist.
    #[error("pocket '{id}' is not configured")]
    MissingPocket { id: String },

    /// The table has no pockets at all.
    #[error("no pockets configured")]
    NoPockets,

    /// Two pockets share an id.
    #[error("pocket id '{id}' is configured more than once")]
    DuplicatePocket { id: String },

    /// A preset scenario targets a pocket that does not exist.
    #[error("scenario '{scenario}' targets unknown pocket '{pocket}'")]
    UnknownScenarioPocket { scenario: String, pocket: String },

    /// A dimension is zero, negative or not finite.
    #[error("invalid {field}: {value}")]
    InvalidDimension { field: &'static str, value: f64 },

    /// Malformed JSON.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to read the configuration file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Favorite management failures.
#[derive(Debug, Error)]
pub enum FavoriteError {
    /// Names must contain something besides whitespace.
    #[error("favorite name cannot be empty")]
    EmptyName,

    /// The deletion password did not match.
    #[error("wrong password")]
    WrongPassword,

    /// No favorite with this id.
    #[error("favorite '{id}' not found")]
    NotFound { id: String },

    /// The angle info could not be computed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed favorites JSON.
    #[error("failed to parse favorites: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shot reference note failures.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Descriptions must contain something besides whitespace.
    #[error("reference description cannot be empty")]
    EmptyDescription,

    /// No reference with this id.
    #[error("reference {id} not found")]
    NotFound { id: u32 },

    /// Malformed references JSON.
    #[error("failed to parse references: {0}")]
    Parse(#[from] serde_json::Error),
}
