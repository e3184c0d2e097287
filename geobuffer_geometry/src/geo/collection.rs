use super::GeoFeature;
use serde_json::{Map, Value};

/// An ordered list of features; written as a GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let features = self.features.iter().map(|feature| feature.to_json(precision)).collect();
		let mut object = Map::new();
		object.insert("type".to_string(), Value::from("FeatureCollection"));
		object.insert("features".to_string(), Value::Array(features));
		Value::Object(object)
	}
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}
}

impl IntoIterator for GeoCollection {
	type Item = GeoFeature;
	type IntoIter = std::vec::IntoIter<GeoFeature>;

	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<I: IntoIterator<Item = GeoFeature>>(features: I) -> Self {
		Self::from(features.into_iter().collect::<Vec<_>>())
	}
}
