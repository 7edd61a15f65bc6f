//! Content API lookup types.
//!
//! A [`Target`] can only be built fully populated, so holding one means the
//! lookup key is complete.

mod target;

pub use target::{CONTENT_REFERENCE_PREFIX, Target, parse_reference_uri};
