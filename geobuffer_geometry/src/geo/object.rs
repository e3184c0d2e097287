use super::{GeoCollection, GeoFeature, Geometry};
use crate::geojson::parse_geojson_object;
use anyhow::Result;

/// Any GeoJSON object that can be buffered.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoObject {
	Geometry(Geometry),
	Feature(GeoFeature),
	FeatureCollection(GeoCollection),
	GeometryCollection(Vec<Geometry>),
}

impl GeoObject {
	pub fn from_json_str(json_str: &str) -> Result<Self> {
		parse_geojson_object(json_str)
	}

	#[must_use]
	pub fn get_type_name(&self) -> &'static str {
		match self {
			GeoObject::Geometry(g) => g.get_type_name(),
			GeoObject::Feature(_) => "Feature",
			GeoObject::FeatureCollection(_) => "FeatureCollection",
			GeoObject::GeometryCollection(_) => "GeometryCollection",
		}
	}
}

impl From<Geometry> for GeoObject {
	fn from(value: Geometry) -> Self {
		GeoObject::Geometry(value)
	}
}

impl From<GeoFeature> for GeoObject {
	fn from(value: GeoFeature) -> Self {
		GeoObject::Feature(value)
	}
}

impl From<GeoCollection> for GeoObject {
	fn from(value: GeoCollection) -> Self {
		GeoObject::FeatureCollection(value)
	}
}
