//! Tagged record fields and the field-to-query encoder.

use std::fmt::Display;

use super::QueryParams;
use crate::Result;

/// The value carried by a single record field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// A single value, already rendered in its display form.
    Scalar(String),
    /// An ordered sequence of values.
    Sequence(Vec<String>),
}

/// One field of a record: the tag it is exported under and its value.
///
/// An empty key marks a field that carries no tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryField {
    pub key: String,
    pub value: FieldValue,
}

impl QueryField {
    /// Returns true if the field carries a non-empty tag.
    pub fn is_tagged(&self) -> bool {
        !self.key.is_empty()
    }
}

/// The fields of a record in declaration order.
///
/// # Example
///
/// ```
/// use ponzu_core::query::{QueryFields, ToQueryFields};
///
/// struct Song {
///     title: String,
///     rating: u8,
///     tags: Vec<String>,
///     draft: bool,
/// }
///
/// impl ToQueryFields for Song {
///     fn query_fields(&self) -> QueryFields {
///         QueryFields::new()
///             .scalar("title", &self.title)
///             .scalar("rating", self.rating)
///             .sequence("tags", &self.tags)
///             .untagged()
///     }
/// }
///
/// let song = Song {
///     title: "Blue".to_string(),
///     rating: 4,
///     tags: vec!["jazz".to_string(), "live".to_string()],
///     draft: true,
/// };
/// let params = ponzu_core::encode(&song).unwrap();
/// assert_eq!(params.encode(), "title=Blue&rating=4&tags=jazz&tags=live");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryFields {
    fields: Vec<QueryField>,
}

impl QueryFields {
    /// Create an empty field list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a scalar field rendered with its [`Display`] form.
    pub fn scalar(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.fields.push(QueryField {
            key: key.into(),
            value: FieldValue::Scalar(value.to_string()),
        });
        self
    }

    /// Push a sequence field, rendering each element with its [`Display`] form.
    pub fn sequence<I>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.fields.push(QueryField {
            key: key.into(),
            value: FieldValue::Sequence(values.into_iter().map(|v| v.to_string()).collect()),
        });
        self
    }

    /// Push a field that carries no tag.
    pub fn untagged(mut self) -> Self {
        self.fields.push(QueryField {
            key: String::new(),
            value: FieldValue::Scalar(String::new()),
        });
        self
    }

    /// Push an already-built field.
    pub fn push(&mut self, field: QueryField) {
        self.fields.push(field);
    }

    /// Returns the number of fields, tagged or not.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, QueryField> {
        self.fields.iter()
    }
}

impl IntoIterator for QueryFields {
    type Item = QueryField;
    type IntoIter = std::vec::IntoIter<QueryField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<QueryField> for QueryFields {
    fn from_iter<I: IntoIterator<Item = QueryField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A record that can be submitted to the content API as query parameters.
///
/// Implementations list every field in declaration order; the encoder
/// decides what ends up in the query.
pub trait ToQueryFields {
    /// Returns the record's fields in declaration order.
    fn query_fields(&self) -> QueryFields;
}

impl<T: ToQueryFields + ?Sized> ToQueryFields for &T {
    fn query_fields(&self) -> QueryFields {
        (**self).query_fields()
    }
}

impl<T: ToQueryFields + ?Sized> ToQueryFields for Box<T> {
    fn query_fields(&self) -> QueryFields {
        (**self).query_fields()
    }
}

impl ToQueryFields for QueryParams {
    fn query_fields(&self) -> QueryFields {
        self.keys()
            .map(|key| QueryField {
                key: key.to_string(),
                value: FieldValue::Sequence(self.get_all(key).to_vec()),
            })
            .collect()
    }
}

/// Encode a record as query parameters.
///
/// Untagged fields are skipped. A scalar field sets its key to its single
/// value. A sequence field sets its key to the first element and appends the
/// rest in order; an empty sequence writes nothing. Keys appear in field
/// order and the record is only read.
///
/// Encoding cannot fail today; the `Result` is kept so callers already handle
/// the error path.
pub fn encode<T: ToQueryFields + ?Sized>(record: &T) -> Result<QueryParams> {
    let mut params = QueryParams::new();

    for field in record.query_fields() {
        if !field.is_tagged() {
            continue;
        }

        match field.value {
            FieldValue::Sequence(values) => {
                for (j, value) in values.into_iter().enumerate() {
                    if j == 0 {
                        params.set(field.key.as_str(), value);
                    } else {
                        params.add(field.key.as_str(), value);
                    }
                }
            }
            FieldValue::Scalar(value) => params.set(field.key, value),
        }
    }

    Ok(params)
}
