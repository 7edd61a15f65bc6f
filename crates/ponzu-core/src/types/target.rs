//! Content lookup target and reference URI parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ReferenceError};
use crate::query::{QueryFields, QueryParams, ToQueryFields};

/// Path and query separator every content reference URI starts with.
pub const CONTENT_REFERENCE_PREFIX: &str = "/api/content?";

/// The criteria needed to look up a single content item.
///
/// Reference URIs have the form `/api/content?type=<Type>&id=<ID>`; other
/// query keys are ignored.
///
/// # Example
///
/// ```
/// use ponzu_core::Target;
///
/// let target = Target::parse("/api/content?type=Post&id=5").unwrap();
/// assert_eq!(target.content_type(), "Post");
/// assert_eq!(target.id(), 5);
/// assert_eq!(target.reference_uri(), "/api/content?type=Post&id=5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTarget", into = "RawTarget")]
pub struct Target {
    content_type: String,
    id: i64,
}

impl Target {
    /// Create a target from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if `content_type` is empty.
    pub fn new(content_type: impl Into<String>, id: i64) -> Result<Self, Error> {
        let content_type = content_type.into();
        if content_type.is_empty() {
            return Err(ReferenceError::EmptyType.into());
        }
        Ok(Self { content_type, id })
    }

    /// Parse a content reference URI.
    ///
    /// The `id` is a base-10 `i64` with an optional leading `-` or `+`
    /// (`id=%2B4` parses as `4`); whitespace, decimals and overflow are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is wrong, the query is not valid
    /// form-urlencoded data, `type` or `id` is missing or empty, or `id` is
    /// not a base-10 integer.
    pub fn parse(uri: &str) -> Result<Self, Error> {
        let query = uri
            .strip_prefix(CONTENT_REFERENCE_PREFIX)
            .ok_or_else(|| ReferenceError::Malformed {
                uri: uri.to_string(),
            })?;

        let params =
            QueryParams::parse(query).map_err(|source| ReferenceError::InvalidEncoding {
                uri: uri.to_string(),
                source,
            })?;

        // First occurrence wins for repeated keys.
        let content_type = required(&params, "type", uri)?;
        let id = required(&params, "id", uri)?;

        let id = id.parse::<i64>().map_err(|source| ReferenceError::InvalidId {
            uri: uri.to_string(),
            value: id.to_string(),
            source,
        })?;

        Ok(Self {
            content_type: content_type.to_string(),
            id,
        })
    }

    /// Returns the content type name.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the item id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Render the reference URI that resolves to this target.
    pub fn reference_uri(&self) -> String {
        let mut params = QueryParams::new();
        params.set("type", self.content_type.as_str());
        params.set("id", self.id.to_string());
        format!("{}{}", CONTENT_REFERENCE_PREFIX, params.encode())
    }
}

fn required<'a>(
    params: &'a QueryParams,
    field: &'static str,
    uri: &str,
) -> Result<&'a str, ReferenceError> {
    match params.get(field) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ReferenceError::MissingField {
            field,
            uri: uri.to_string(),
        }),
    }
}

/// Parse a content reference URI into a [`Target`].
///
/// Shorthand for [`Target::parse`].
pub fn parse_reference_uri(uri: &str) -> Result<Target, Error> {
    Target::parse(uri)
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reference_uri())
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl ToQueryFields for Target {
    fn query_fields(&self) -> QueryFields {
        QueryFields::new()
            .scalar("type", &self.content_type)
            .scalar("id", self.id)
    }
}

#[derive(Serialize, Deserialize)]
struct RawTarget {
    #[serde(rename = "type")]
    content_type: String,
    id: i64,
}

impl TryFrom<RawTarget> for Target {
    type Error = Error;

    fn try_from(raw: RawTarget) -> Result<Self, Self::Error> {
        Target::new(raw.content_type, raw.id)
    }
}

impl From<Target> for RawTarget {
    fn from(target: Target) -> Self {
        Self {
            content_type: target.content_type,
            id: target.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_err(uri: &str) -> ReferenceError {
        match Target::parse(uri) {
            Err(Error::Reference(err)) => err,
            other => panic!("expected reference error for {uri}, got {other:?}"),
        }
    }

    #[test]
    fn valid_reference() {
        let target = Target::parse("/api/content?type=post&id=5").unwrap();
        assert_eq!(target, Target::new("post", 5).unwrap());
    }

    #[test]
    fn formatted_references_roundtrip() {
        for (content_type, id) in [("post", 0), ("Song", 42), ("a", -7), ("Review", i64::MAX)] {
            let uri = format!("/api/content?type={content_type}&id={id}");
            let target = parse_reference_uri(&uri).unwrap();
            assert_eq!(target.content_type(), content_type);
            assert_eq!(target.id(), id);
        }
    }

    #[test]
    fn reference_uri_roundtrip_with_escaping() {
        let target = Target::new("Blog Post & Co", 9).unwrap();
        let uri = target.reference_uri();
        assert_eq!(uri, "/api/content?type=Blog+Post+%26+Co&id=9");
        assert_eq!(uri.parse::<Target>().unwrap(), target);
        assert_eq!(target.to_string(), uri);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let target = Target::parse("/api/content?slug=hello&id=3&type=page&x").unwrap();
        assert_eq!(target, Target::new("page", 3).unwrap());
    }

    #[test]
    fn first_occurrence_wins() {
        let target = Target::parse("/api/content?type=a&type=b&id=1&id=2").unwrap();
        assert_eq!(target, Target::new("a", 1).unwrap());
    }

    #[test]
    fn empty_first_occurrence_counts_as_missing() {
        let err = reference_err("/api/content?type=&type=post&id=1");
        assert_eq!(err.missing_field(), Some("type"));
    }

    #[test]
    fn invalid_prefix() {
        let err = reference_err("/wrong/prefix?type=a&id=1");
        assert!(matches!(err, ReferenceError::Malformed { ref uri } if uri == "/wrong/prefix?type=a&id=1"));
    }

    #[test]
    fn invalid_prefix_without_separator() {
        assert!(matches!(
            reference_err("/api/content"),
            ReferenceError::Malformed { .. }
        ));
        assert!(matches!(
            reference_err("api/content?type=a&id=1"),
            ReferenceError::Malformed { .. }
        ));
    }

    #[test]
    fn invalid_encoding() {
        let err = reference_err("/api/content?type=%zz&id=1");
        match err {
            ReferenceError::InvalidEncoding { uri, .. } => {
                assert_eq!(uri, "/api/content?type=%zz&id=1");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            reference_err("/api/content?type=a;id=1"),
            ReferenceError::InvalidEncoding { .. }
        ));
    }

    #[test]
    fn missing_type() {
        let err = reference_err("/api/content?id=1");
        assert_eq!(err.missing_field(), Some("type"));
        assert_eq!(
            err.to_string(),
            "reference URI missing 'type' value: /api/content?id=1"
        );
    }

    #[test]
    fn missing_id() {
        assert_eq!(reference_err("/api/content?type=post").missing_field(), Some("id"));
        assert_eq!(reference_err("/api/content?type=post&id=").missing_field(), Some("id"));
    }

    #[test]
    fn type_is_checked_before_id() {
        assert_eq!(reference_err("/api/content?").missing_field(), Some("type"));
    }

    #[test]
    fn invalid_id() {
        for id in ["abc", "1.5", " 1", "1 ", "0x10", "99999999999999999999"] {
            let uri = format!("/api/content?type=post&id={id}");
            match reference_err(&uri) {
                ReferenceError::InvalidId { value, .. } => assert_eq!(value, id),
                other => panic!("unexpected error for {id:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn signed_ids_are_accepted() {
        assert_eq!(Target::parse("/api/content?type=t&id=-4").unwrap().id(), -4);
        assert_eq!(Target::parse("/api/content?type=t&id=%2B4").unwrap().id(), 4);
        assert_eq!(
            Target::parse("/api/content?type=a+b&id=-0").unwrap(),
            Target::new("a b", 0).unwrap()
        );
    }

    #[test]
    fn empty_type_rejected() {
        assert!(matches!(
            Target::new("", 1),
            Err(Error::Reference(ReferenceError::EmptyType))
        ));
    }

    #[test]
    fn encodes_as_query_params() {
        let target = Target::new("Song", 12).unwrap();
        let params = crate::encode(&target).unwrap();
        assert_eq!(params.encode(), "type=Song&id=12");
    }

    #[test]
    fn serde_roundtrip() {
        let target = Target::new("post", 5).unwrap();
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json, serde_json::json!({"type": "post", "id": 5}));

        let back: Target = serde_json::from_value(json).unwrap();
        assert_eq!(back, target);
    }

    #[test]
    fn deserialize_rejects_empty_type() {
        let result = serde_json::from_str::<Target>(r#"{"type": "", "id": 1}"#);
        assert!(result.is_err());
    }
}
