use super::{
	GeometryTrait, LineStringGeometry, PointGeometry, PolygonGeometry, parts_to_json, verify_parts,
};
use anyhow::Result;
use serde_json::Value;
use std::fmt::{self, Debug, Formatter};

/// Declares a multi-part geometry whose checks and coordinates come from its parts.
macro_rules! multi_geometry {
	($(#[$meta:meta])* $name:ident of $part:ty, $part_name:literal) => {
		$(#[$meta])*
		#[derive(Clone, PartialEq)]
		pub struct $name(pub Vec<$part>);

		impl GeometryTrait for $name {
			fn verify(&self) -> Result<()> {
				verify_parts(&self.0, $part_name)
			}

			fn to_coord_json(&self, precision: Option<u8>) -> Value {
				parts_to_json(&self.0, precision)
			}
		}

		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
				f.debug_list().entries(&self.0).finish()
			}
		}
	};
}

multi_geometry!(
	/// Points that are buffered one by one.
	MultiPointGeometry of PointGeometry, "point"
);

multi_geometry!(
	/// Lines that are buffered one by one.
	MultiLineStringGeometry of LineStringGeometry, "line"
);

multi_geometry!(
	/// Polygons that are buffered together: each part is merged with the whole shape.
	MultiPolygonGeometry of PolygonGeometry, "polygon"
);

impl MultiPolygonGeometry {
	#[must_use]
	pub fn to_geo(&self) -> geo::MultiPolygon<f64> {
		self.0.iter().map(PolygonGeometry::to_geo).collect()
	}
}

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(polygons: geo::MultiPolygon<f64>) -> Self {
		polygons.into_iter().map(PolygonGeometry::from).collect()
	}
}
