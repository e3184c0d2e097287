//! Reading and writing GeoJSON.
//!
//! Parsing goes through [`serde_json::Value`] and produces the crate's own types:
//! [`crate::GeoObject`], [`crate::GeoCollection`], [`crate::GeoFeature`] and [`crate::Geometry`].

mod parse;
mod read;
mod write;

pub use parse::*;
pub use read::*;
pub use write::*;
