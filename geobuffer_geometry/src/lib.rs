//! Geometry data model for geobuffer.
//!
//! Provides longitude/latitude geometries ([`Geometry`] and its single and multi part types),
//! features with arbitrary properties ([`GeoFeature`], [`GeoProperties`], [`GeoValue`]),
//! collections ([`GeoCollection`], [`GeoObject`]) and the GeoJSON reader and writer for them.

mod error;
mod geo;
pub mod geojson;

pub use error::*;
pub use self::geo::*;
pub use geojson::*;
