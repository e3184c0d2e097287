use anyhow::{Context, Result};
use serde_json::Value;
use std::fmt::Debug;

/// Shared behaviour of the longitude/latitude geometry types.
pub trait GeometryTrait: Debug + Clone {
	/// Checks the structural rules GeoJSON puts on the type, such as minimum position counts and closed rings.
	fn verify(&self) -> Result<()>;

	/// The GeoJSON `coordinates` member, rounded to `precision` decimal places if given.
	fn to_coord_json(&self, precision: Option<u8>) -> Value;
}

/// Verifies every part; the error names the index of the first broken one.
pub(crate) fn verify_parts<G: GeometryTrait>(parts: &[G], part_name: &str) -> Result<()> {
	parts
		.iter()
		.enumerate()
		.try_for_each(|(index, part)| part.verify().with_context(|| format!("{part_name} {index}")))
}

pub(crate) fn parts_to_json<G: GeometryTrait>(parts: &[G], precision: Option<u8>) -> Value {
	Value::Array(parts.iter().map(|part| part.to_coord_json(precision)).collect())
}
