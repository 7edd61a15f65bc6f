//! ponzu-core - Client helpers for a Ponzu content API.
//!
//! Two independent, pure helpers:
//!
//! - [`encode`] turns a record implementing [`ToQueryFields`] into ordered
//!   [`QueryParams`] for a request.
//! - [`parse_reference_uri`] turns a `/api/content?type=<Type>&id=<ID>`
//!   reference into a [`Target`].
//!
//! # Example
//!
//! ```
//! use ponzu_core::{QueryFields, ToQueryFields, encode, parse_reference_uri};
//!
//! struct Post {
//!     title: String,
//!     tags: Vec<String>,
//! }
//!
//! impl ToQueryFields for Post {
//!     fn query_fields(&self) -> QueryFields {
//!         QueryFields::new()
//!             .scalar("title", &self.title)
//!             .sequence("tags", &self.tags)
//!     }
//! }
//!
//! # fn main() -> Result<(), ponzu_core::Error> {
//! let post = Post {
//!     title: "x".to_string(),
//!     tags: vec!["a".to_string(), "b".to_string()],
//! };
//! assert_eq!(encode(&post)?.encode(), "title=x&tags=a&tags=b");
//!
//! let target = parse_reference_uri("/api/content?type=Post&id=5")?;
//! assert_eq!((target.content_type(), target.id()), ("Post", 5));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod query;
pub mod types;

pub use error::{Error, QueryError, QueryParseError, ReferenceError};
pub use query::{FieldValue, QueryField, QueryFields, QueryParams, ToQueryFields, encode};
pub use types::{CONTENT_REFERENCE_PREFIX, Target, parse_reference_uri};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
