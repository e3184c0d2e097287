use thiserror::Error;

/// Classified failures raised while decoding geometries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeometryError {
	/// The GeoJSON `type` tag names a geometry this crate cannot represent.
	#[error("geometry type '{0}' not supported")]
	UnsupportedType(String),

	/// The coordinates do not form a valid geometry of the tagged type.
	#[error("invalid {0} geometry: {1}")]
	InvalidCoordinates(&'static str, String),
}
