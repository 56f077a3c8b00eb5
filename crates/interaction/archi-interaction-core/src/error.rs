//! Error types for the interaction controllers.
//!
//! Runtime behaviors degrade silently; these errors only surface while
//! loading configuration or reading element attributes, so callers can
//! log and skip the offending element.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InteractionError>;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum InteractionError {
    /// `data-count` did not start with a non-negative integer.
    #[error("invalid count target {raw:?}: {reason}")]
    InvalidCountTarget { raw: String, reason: &'static str },

    /// A configuration field is outside its accepted range.
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for InteractionError {
    fn from(e: serde_json::Error) -> Self {
        InteractionError::ConfigParse(e.to_string())
    }
}
