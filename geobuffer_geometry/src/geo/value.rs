use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// A property value as read from GeoJSON. Nested arrays and objects are kept as they are.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoValue {
	Null,
	Bool(bool),
	Int(i64),
	UInt(u64),
	Double(f64),
	String(String),
	Array(Vec<GeoValue>),
	Object(BTreeMap<String, GeoValue>),
}

impl GeoValue {
	/// Converts back to JSON. A non-finite `Double` has no JSON form and becomes `null`.
	#[must_use]
	pub fn to_json(&self) -> Value {
		match self {
			GeoValue::Null => Value::Null,
			GeoValue::Bool(b) => Value::Bool(*b),
			GeoValue::Int(i) => Value::from(*i),
			GeoValue::UInt(u) => Value::from(*u),
			GeoValue::Double(d) => Number::from_f64(*d).map_or(Value::Null, Value::Number),
			GeoValue::String(s) => Value::String(s.clone()),
			GeoValue::Array(items) => items.iter().map(GeoValue::to_json).collect(),
			GeoValue::Object(entries) => Value::Object(entries.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()),
		}
	}
}

impl From<&Value> for GeoValue {
	fn from(value: &Value) -> Self {
		match value {
			Value::Null => GeoValue::Null,
			Value::Bool(b) => GeoValue::Bool(*b),
			Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
				(Some(u), _, _) => GeoValue::UInt(u),
				(None, Some(i), _) => GeoValue::Int(i),
				(None, None, d) => GeoValue::Double(d.unwrap_or(f64::NAN)),
			},
			Value::String(s) => GeoValue::String(s.clone()),
			Value::Array(items) => GeoValue::Array(items.iter().map(GeoValue::from).collect()),
			Value::Object(entries) => GeoValue::Object(entries.iter().map(|(k, v)| (k.clone(), GeoValue::from(v))).collect()),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		match u64::try_from(value) {
			Ok(unsigned) => GeoValue::UInt(unsigned),
			Err(_) => GeoValue::Int(value),
		}
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn numbers_keep_their_kind() {
		assert_eq!(GeoValue::from(&json!(3)), GeoValue::UInt(3));
		assert_eq!(GeoValue::from(&json!(-3)), GeoValue::Int(-3));
		assert_eq!(GeoValue::from(&json!(2.5)), GeoValue::Double(2.5));
		assert_eq!(GeoValue::from(7i64), GeoValue::from(&json!(7)));
	}

	#[test]
	fn nested_values_survive_round_trip() {
		let json = json!({"tags": ["a", "b"], "meta": {"level": 2, "ok": true, "none": null, "ratio": 0.5}});
		assert_eq!(GeoValue::from(&json).to_json(), json);
	}

	#[test]
	fn non_finite_double_becomes_null() {
		assert_eq!(GeoValue::Double(f64::NAN).to_json(), Value::Null);
	}
}
