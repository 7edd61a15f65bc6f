//! Error types for ponzu-core.
//!
//! Reference parsing and query encoding each get their own error enum; both
//! convert into the crate-level [`Error`].

use std::num::ParseIntError;

use thiserror::Error;

/// The unified error type for ponzu-core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A content reference URI could not be turned into a target.
    #[error("invalid reference: {0}")]
    Reference(#[from] ReferenceError),

    /// A record could not be encoded as query parameters.
    #[error("query encoding error: {0}")]
    Query(#[from] QueryError),
}

impl Error {
    /// Returns true if retrying the same call could succeed.
    ///
    /// Every failure in this crate is a validation failure tied to the input,
    /// so this is always false.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Errors produced while parsing a content reference URI.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// The URI does not start with the content reference prefix.
    #[error("improperly formatted reference URI: {uri}")]
    Malformed { uri: String },

    /// The query portion is not valid form-urlencoded data.
    #[error("failed to parse reference URI: {uri}, {source}")]
    InvalidEncoding {
        uri: String,
        #[source]
        source: QueryParseError,
    },

    /// A required query key is absent or empty.
    #[error("reference URI missing '{field}' value: {uri}")]
    MissingField { field: &'static str, uri: String },

    /// The `id` value is not a base-10 integer.
    #[error("reference URI has invalid id '{value}': {uri}, {source}")]
    InvalidId {
        uri: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A target was built with an empty content type.
    #[error("content type cannot be empty")]
    EmptyType,
}

impl ReferenceError {
    /// Returns the name of the missing field, if this is a missing field error.
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            ReferenceError::MissingField { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Errors produced while encoding a record as query parameters.
///
/// Nothing in the current encoder fails; the variant exists so callers
/// already handle the error path when record validation is added.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A field value cannot be expressed as a query parameter.
    #[error("unsupported value for '{key}': {reason}")]
    Unsupported { key: String, reason: String },
}

/// Errors produced by strict query string parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParseError {
    /// A `key=value` segment contains a `;`, which is not a valid separator.
    #[error("invalid semicolon separator in query: '{segment}'")]
    Semicolon { segment: String },

    /// A `%` is not followed by two hex digits.
    #[error("invalid URL escape \"{escape}\"")]
    InvalidEscape { escape: String },

    /// The decoded bytes are not valid UTF-8.
    #[error("invalid UTF-8 in query segment '{segment}'")]
    InvalidUtf8 { segment: String },
}
