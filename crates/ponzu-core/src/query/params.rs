//! Ordered, multi-valued query parameters.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use url::form_urlencoded;

use crate::error::QueryParseError;

/// An ordered mapping from key to one or more values.
///
/// Keys keep the order in which they were first inserted and the values under
/// a key keep the order in which they were added, so the encoded query string
/// is deterministic.
///
/// # Example
///
/// ```
/// use ponzu_core::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.set("type", "Post");
/// params.add("tag", "rust");
/// params.add("tag", "cms");
///
/// assert_eq!(params.get("type"), Some("Post"));
/// assert_eq!(params.get_all("tag"), ["rust", "cms"]);
/// assert_eq!(params.encode(), "type=Post&tag=rust&tag=cms");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a form-urlencoded query string (without the leading `?`).
    ///
    /// Parsing is strict: a segment containing `;`, a `%` not followed by two
    /// hex digits, or percent-decoded bytes that are not UTF-8 all fail.
    /// Empty segments are skipped and a segment without `=` has an empty value.
    ///
    /// # Errors
    ///
    /// Returns the first [`QueryParseError`] encountered.
    pub fn parse(query: &str) -> Result<Self, QueryParseError> {
        let mut params = Self::new();

        for segment in query.split('&') {
            if segment.contains(';') {
                return Err(QueryParseError::Semicolon {
                    segment: segment.to_string(),
                });
            }
            if segment.is_empty() {
                continue;
            }

            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            params.add(unescape(key)?, unescape(value)?);
        }

        Ok(params)
    }

    /// Set `key` to the single value `value`, replacing any existing values.
    ///
    /// A key that is already present keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => self.entries[i].1 = vec![value],
            None => self.entries.push((key, vec![value])),
        }
    }

    /// Append `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => self.entries[i].1.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(String::as_str)
    }

    /// Returns all values for `key` in insertion order.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.position(key)
            .map(|i| self.entries[i].1.as_slice())
            .unwrap_or(&[])
    }

    /// Returns true if `key` has at least one value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Remove `key`, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over every `(key, value)` pair, flattening repeated values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    /// Render as an `application/x-www-form-urlencoded` query string.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

/// Serializes as a sequence of `(key, value)` pairs, the shape HTTP clients
/// accept for query parameters.
impl Serialize for QueryParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(None)?;
        for pair in self.iter() {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}

/// Percent-decode one key or value, treating `+` as a space.
fn unescape(s: &str) -> Result<String, QueryParseError> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let decoded = match (bytes.get(i + 1), bytes.get(i + 2)) {
                    (Some(&hi), Some(&lo)) => hex_value(hi).zip(hex_value(lo)),
                    _ => None,
                };
                let Some((hi, lo)) = decoded else {
                    let end = (i + 3).min(bytes.len());
                    return Err(QueryParseError::InvalidEscape {
                        escape: String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                    });
                };
                out.push((hi << 4) | lo);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out).map_err(|_| QueryParseError::InvalidUtf8 {
        segment: s.to_string(),
    })
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
