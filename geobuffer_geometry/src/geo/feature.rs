use super::{GeoProperties, GeoValue, Geometry};
use serde_json::{Map, Value};

/// A geometry with its properties and optional id.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoValue>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self::with_properties(geometry, &GeoProperties::new())
	}

	/// A feature without id that carries a copy of `properties`.
	#[must_use]
	pub fn with_properties(geometry: Geometry, properties: &GeoProperties) -> Self {
		Self {
			id: None,
			geometry,
			properties: properties.clone(),
		}
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key, GeoValue::from(value));
	}

	/// Serializes as a GeoJSON `Feature`. The `id` member is left out when there is none.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut object = Map::new();
		object.insert("type".to_string(), Value::from("Feature"));
		if let Some(id) = &self.id {
			object.insert("id".to_string(), id.to_json());
		}
		object.insert("geometry".to_string(), self.geometry.to_json(precision));
		object.insert("properties".to_string(), self.properties.to_json());
		Value::Object(object)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: Some(GeoValue::UInt(13)),
			geometry: Geometry::new_example(),
			properties: [
				("name", GeoValue::from("Nice")),
				("population", GeoValue::UInt(348_085)),
				("is_nice", GeoValue::from(true)),
			]
			.into_iter()
			.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn to_json() {
		let mut feature = GeoFeature::new(Geometry::new_point([1.5, -2.0]));
		feature.id = Some(GeoValue::from("a"));
		feature.set_property("name".to_string(), "spot");
		assert_eq!(
			feature.to_json(None),
			json!({
				"type": "Feature",
				"id": "a",
				"geometry": {"type": "Point", "coordinates": [1.5, -2.0]},
				"properties": {"name": "spot"}
			})
		);
	}

	#[test]
	fn with_properties_copies_but_drops_the_id() {
		let example = GeoFeature::new_example();
		let feature = GeoFeature::with_properties(Geometry::new_point([0.0, 0.0]), &example.properties);
		assert_eq!(feature.properties, example.properties);
		assert_eq!(feature.id, None);
		assert!(feature.to_json(None).get("id").is_none());
	}
}
