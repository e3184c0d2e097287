//! Buffering of points, lines, polygons and collections of them.
//!
//! [`buffer`] is the entry point. It walks collections, hands each geometry to the
//! routine for its type and returns every result as a feature carrying the
//! properties of the input it came from.

mod area;
mod line;
mod point;
mod union;

pub use area::*;
pub use line::*;
pub use point::*;
pub use union::*;

use crate::{BufferOptions, BufferParams, error::classify_error};
use anyhow::Result;
use geobuffer_geometry::{GeoCollection, GeoFeature, GeoObject, GeoProperties, Geometry};
use itertools::Itertools;

/// Buffers any GeoJSON object. Collections are flattened into one result collection.
pub fn buffer(shape: &GeoObject, options: &BufferOptions) -> Result<GeoCollection> {
	let params = options.resolve()?;
	buffer_object(shape, &params)
}

/// Parses GeoJSON text and buffers it. The radius is checked before the text is parsed.
pub fn buffer_geojson(json: &str, options: &BufferOptions) -> Result<GeoCollection> {
	let params = options.resolve()?;
	let shape = GeoObject::from_json_str(json).map_err(classify_error)?;
	buffer_object(&shape, &params)
}

pub fn buffer_object(shape: &GeoObject, params: &BufferParams) -> Result<GeoCollection> {
	log::debug!("buffering {} by {} {}", shape.get_type_name(), params.radius, params.units);
	match shape {
		GeoObject::Geometry(geometry) => buffer_geometry(geometry, &GeoProperties::new(), params),
		GeoObject::Feature(feature) => buffer_feature(feature, params),
		GeoObject::FeatureCollection(collection) => collection
			.features
			.iter()
			.map(|feature| buffer_feature(feature, params))
			.flatten_ok()
			.collect(),
		GeoObject::GeometryCollection(geometries) => {
			let properties = GeoProperties::new();
			geometries
				.iter()
				.map(|geometry| buffer_geometry(geometry, &properties, params))
				.flatten_ok()
				.collect()
		}
	}
}

pub fn buffer_feature(feature: &GeoFeature, params: &BufferParams) -> Result<GeoCollection> {
	buffer_geometry(&feature.geometry, &feature.properties, params)
}

/// Buffers one geometry. Every resulting feature gets a copy of `properties`.
pub fn buffer_geometry(geometry: &Geometry, properties: &GeoProperties, params: &BufferParams) -> Result<GeoCollection> {
	use Geometry::*;

	let results: Vec<Geometry> = match geometry {
		Point(point) => vec![point_buffer(&point.0, params).into()],
		MultiPoint(points) => points
			.0
			.iter()
			.map(|point| point_buffer(&point.0, params).into())
			.collect(),
		LineString(line) => vec![line_buffer(line, params)?.into()],
		MultiLineString(lines) => lines
			.0
			.iter()
			.map(|line| line_buffer(line, params).map(Geometry::from))
			.collect::<Result<_>>()?,
		Polygon(polygon) => vec![polygon_buffer(polygon, params)?],
		MultiPolygon(polygons) => multi_polygon_buffer(polygons, params)?,
	};
	log::trace!("{} gave {} buffered geometries", geometry.get_type_name(), results.len());

	Ok(results
		.into_iter()
		.map(|geometry| GeoFeature::with_properties(geometry, properties))
		.collect())
}
