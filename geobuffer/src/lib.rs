//! Geodesic buffers around GeoJSON shapes.
//!
//! A buffer is the area within a given distance of a shape. Points become circles,
//! lines become capsules with rounded ends, and polygons grow outwards.
//! Distances are measured along great circles on a spherical Earth.
//!
//! ```rust
//! use geobuffer::{BufferOptions, Unit, buffer_geojson};
//!
//! let options = BufferOptions::new(500.0).with_units(Unit::Meters).with_resolution(16);
//! let result = buffer_geojson(r#"{"type":"Point","coordinates":[13.4,52.5]}"#, &options).unwrap();
//! assert_eq!(result.len(), 1);
//! ```

pub mod buffer;
mod error;
pub mod geodesy;
mod options;
mod units;

pub use buffer::{buffer, buffer_geojson};
pub use error::{BufferError, classify_error};
pub use options::*;
pub use units::*;

pub use geobuffer_geometry as geometry;
