use super::GeoValue;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The property mapping of a feature. Buffering never reads it; every result gets a copy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoProperties(BTreeMap<String, GeoValue>);

impl GeoProperties {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: String, value: GeoValue) {
		self.0.insert(key, value);
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.0.get(key)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		Value::Object(self.0.iter().map(|(key, value)| (key.clone(), value.to_json())).collect())
	}
}

impl From<&Map<String, Value>> for GeoProperties {
	fn from(map: &Map<String, Value>) -> Self {
		Self(map.iter().map(|(key, value)| (key.clone(), GeoValue::from(value))).collect())
	}
}

impl<K: Into<String>> FromIterator<(K, GeoValue)> for GeoProperties {
	fn from_iter<I: IntoIterator<Item = (K, GeoValue)>>(entries: I) -> Self {
		Self(entries.into_iter().map(|(key, value)| (key.into(), value)).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn insert_and_get() {
		let mut properties: GeoProperties = [("name", GeoValue::from("Nice"))].into_iter().collect();
		properties.insert("population".to_string(), GeoValue::from(348_085i64));
		assert_eq!(properties.len(), 2);
		assert_eq!(properties.get("population"), Some(&GeoValue::UInt(348_085)));
		assert_eq!(properties.get("area"), None);
	}

	#[test]
	fn json_round_trip() {
		let json = json!({"name": "Nice", "tags": {"sea": true}});
		let Value::Object(map) = &json else { unreachable!() };
		assert_eq!(GeoProperties::from(map).to_json(), json);
	}
}
