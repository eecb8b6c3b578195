//! Custom extractors for Axum handlers.
//!
//! Both extractors are lenient: they turn odd input into values the
//! handler can act on instead of rejecting the request early.

pub mod id_path;
pub mod lenient_json;

pub use id_path::{parse_id, IdPath};
pub use lenient_json::LenientJson;
