//! Query encoding for JSON records.
//!
//! Object members are fields tagged with their member name. Arrays become
//! sequence fields, everything else a scalar.

use serde_json::{Map, Value};

use super::{FieldValue, QueryField, QueryFields, ToQueryFields};

impl ToQueryFields for Map<String, Value> {
    fn query_fields(&self) -> QueryFields {
        let mut fields = QueryFields::new();
        for (key, value) in self {
            let value = match value {
                Value::Array(items) => {
                    FieldValue::Sequence(items.iter().map(display_value).collect())
                }
                other => FieldValue::Scalar(display_value(other)),
            };
            fields.push(QueryField {
                key: key.clone(),
                value,
            });
        }
        fields
    }
}

/// Only objects have fields; any other value encodes to nothing.
impl ToQueryFields for Value {
    fn query_fields(&self) -> QueryFields {
        match self {
            Value::Object(map) => map.query_fields(),
            _ => QueryFields::new(),
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
