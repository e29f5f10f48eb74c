use thiserror::Error;

use crate::control_system::intersection::LightId;

/// Errors from parsing an `H:M:S` clock string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    /// The string did not split into exactly three fields.
    #[error("expected H:M:S, got {0:?}")]
    WrongFieldCount(String),

    /// One of the fields was not an unsigned integer.
    #[error("invalid clock field {0:?}")]
    InvalidField(String),
}

/// Errors from addressing a light on an intersection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntersectionError {
    /// The handle does not belong to this intersection.
    #[error("unknown light {0:?}")]
    UnknownLight(LightId),
}

/// Errors from loading or applying a scenario config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("arrival names unknown light {0:?}")]
    UnknownLight(String),

    #[error("light names must not be empty")]
    EmptyName,

    #[error("both lights are named {0:?}")]
    DuplicateName(String),

    #[error(transparent)]
    Intersection(#[from] IntersectionError),
}
