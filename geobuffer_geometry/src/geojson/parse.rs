use crate::{
	Coordinates, GeoCollection, GeoFeature, GeoObject, GeoProperties, GeoValue, Geometry, GeometryError,
	LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry,
	PolygonGeometry, RingGeometry,
};
use anyhow::{Context, Result, anyhow, bail};
use serde_json::{Map, Value};

/// Parses a GeoJSON `FeatureCollection`.
pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	let value: Value = serde_json::from_str(json).context("parsing GeoJSON")?;
	parse_geojson_collection(&value)
}

/// Parses any GeoJSON object: a geometry, a `Feature`, a `FeatureCollection` or a `GeometryCollection`.
pub fn parse_geojson_object(json: &str) -> Result<GeoObject> {
	let value: Value = serde_json::from_str(json).context("parsing GeoJSON")?;
	parse_geojson_value(&value)
}

pub fn parse_geojson_value(value: &Value) -> Result<GeoObject> {
	let object = as_object(value, "GeoJSON object")?;
	Ok(match get_type(object, "GeoJSON object")? {
		"FeatureCollection" => GeoObject::FeatureCollection(parse_geojson_collection(value)?),
		"Feature" => GeoObject::Feature(parse_geojson_feature(value)?),
		"GeometryCollection" => {
			let geometries = match object.get("geometries") {
				Some(Value::Array(list)) => list.iter().map(parse_geojson_geometry).collect::<Result<Vec<_>>>()?,
				Some(_) => bail!("'geometries' must be an array"),
				None => Vec::new(),
			};
			GeoObject::GeometryCollection(geometries)
		}
		_ => GeoObject::Geometry(parse_geojson_geometry(value)?),
	})
}

pub fn parse_geojson_collection(value: &Value) -> Result<GeoCollection> {
	let object = as_object(value, "FeatureCollection")?;
	check_type(object, "FeatureCollection")?;

	let features = match object.get("features") {
		Some(Value::Array(list)) => list
			.iter()
			.enumerate()
			.map(|(index, feature)| parse_geojson_feature(feature).with_context(|| format!("feature {index}")))
			.collect::<Result<Vec<_>>>()?,
		Some(_) => bail!("'features' must be an array"),
		None => Vec::new(),
	};
	log::trace!("parsed FeatureCollection with {} features", features.len());

	Ok(GeoCollection { features })
}

pub fn parse_geojson_feature(value: &Value) -> Result<GeoFeature> {
	let object = as_object(value, "Feature")?;
	check_type(object, "Feature")?;

	let id = match object.get("id") {
		None | Some(Value::Null) => None,
		Some(id @ (Value::String(_) | Value::Number(_))) => Some(GeoValue::from(id)),
		Some(_) => bail!("feature id must be a string or a number"),
	};

	let geometry = match object.get("geometry") {
		None | Some(Value::Null) => bail!("feature is missing 'geometry'"),
		Some(geometry) => parse_geojson_geometry(geometry)?,
	};

	let properties = match object.get("properties") {
		None | Some(Value::Null) => GeoProperties::new(),
		Some(Value::Object(map)) => GeoProperties::from(map),
		Some(_) => bail!("feature properties must be an object"),
	};

	Ok(GeoFeature {
		id,
		geometry,
		properties,
	})
}

pub fn parse_geojson_geometry(value: &Value) -> Result<Geometry> {
	let object = as_object(value, "geometry")?;
	let geometry_type = get_type(object, "geometry")?;

	if !matches!(
		geometry_type,
		"Point" | "LineString" | "Polygon" | "MultiPoint" | "MultiLineString" | "MultiPolygon"
	) {
		return Err(GeometryError::UnsupportedType(geometry_type.to_string()).into());
	}

	let coordinates = object
		.get("coordinates")
		.ok_or_else(|| anyhow!("geometry must have coordinates"))?;

	let invalid = |message: String| GeometryError::InvalidCoordinates(type_label(geometry_type), message);

	let geometry = match geometry_type {
		"Point" => Geometry::Point(PointGeometry(parse_position(coordinates).map_err(invalid)?)),
		"LineString" => Geometry::LineString(parse_line(coordinates).map_err(invalid)?),
		"Polygon" => Geometry::Polygon(parse_polygon(coordinates).map_err(invalid)?),
		"MultiPoint" => Geometry::MultiPoint(MultiPointGeometry(
			parse_list(coordinates, parse_position)
				.map_err(invalid)?
				.into_iter()
				.map(PointGeometry)
				.collect(),
		)),
		"MultiLineString" => Geometry::MultiLineString(MultiLineStringGeometry(
			parse_list(coordinates, parse_line).map_err(invalid)?,
		)),
		_ => Geometry::MultiPolygon(MultiPolygonGeometry(
			parse_list(coordinates, parse_polygon).map_err(invalid)?,
		)),
	};
	geometry.verify().map_err(|e| invalid(format!("{e:#}")))?;

	Ok(geometry)
}

fn type_label(geometry_type: &str) -> &'static str {
	match geometry_type {
		"Point" => "Point",
		"LineString" => "LineString",
		"Polygon" => "Polygon",
		"MultiPoint" => "MultiPoint",
		"MultiLineString" => "MultiLineString",
		_ => "MultiPolygon",
	}
}

fn as_object<'a>(value: &'a Value, name: &str) -> Result<&'a Map<String, Value>> {
	value
		.as_object()
		.ok_or_else(|| anyhow!("{name} must be a JSON object"))
}

fn get_type<'a>(object: &'a Map<String, Value>, name: &str) -> Result<&'a str> {
	object
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| anyhow!("{name} must have a type"))
}

fn check_type(object: &Map<String, Value>, name: &str) -> Result<()> {
	if get_type(object, name)? != name {
		bail!("type must be '{name}'")
	}
	Ok(())
}

type ParseResult<T> = std::result::Result<T, String>;

fn parse_list<T>(value: &Value, item: fn(&Value) -> ParseResult<T>) -> ParseResult<Vec<T>> {
	value
		.as_array()
		.ok_or_else(|| format!("expected an array, got {value}"))?
		.iter()
		.map(item)
		.collect()
}

/// Reads `[longitude, latitude]`. A third (altitude) value is accepted and dropped.
fn parse_position(value: &Value) -> ParseResult<Coordinates> {
	let numbers = parse_list(value, |v| v.as_f64().ok_or_else(|| format!("expected a number, got {v}")))?;
	match numbers.as_slice() {
		[x, y] | [x, y, _] => Ok(Coordinates::new(*x, *y)),
		_ => Err(format!("a position must have two or three values, got {}", numbers.len())),
	}
}

fn parse_line(value: &Value) -> ParseResult<LineStringGeometry> {
	parse_list(value, parse_position).map(LineStringGeometry)
}

/// Rings that do not end on their first position are closed.
fn parse_polygon(value: &Value) -> ParseResult<PolygonGeometry> {
	let mut polygon = parse_list(value, |ring| parse_list(ring, parse_position).map(RingGeometry)).map(PolygonGeometry)?;
	polygon.close();
	Ok(polygon)
}
