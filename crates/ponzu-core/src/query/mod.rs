//! Query parameter encoding.
//!
//! [`QueryParams`] is the ordered, multi-valued collection sent to the
//! content API. Records implement [`ToQueryFields`] to describe their tagged
//! fields and [`encode`] turns them into a collection.

mod fields;
mod json;
mod params;

pub use fields::{FieldValue, QueryField, QueryFields, ToQueryFields, encode};
pub use params::QueryParams;
