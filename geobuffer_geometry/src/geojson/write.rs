use crate::GeoCollection;
use anyhow::Result;
use std::io::Write;

/// Writes `collection` as one GeoJSON `FeatureCollection`.
pub fn write_geojson(mut writer: impl Write, collection: &GeoCollection, precision: Option<u8>, pretty: bool) -> Result<()> {
	let json = collection.to_json(precision);
	if pretty {
		serde_json::to_writer_pretty(&mut writer, &json)?;
	} else {
		serde_json::to_writer(&mut writer, &json)?;
	}
	writeln!(writer)?;
	Ok(())
}

/// Writes every feature of `collection` on its own line.
pub fn write_ndgeojson(mut writer: impl Write, collection: &GeoCollection, precision: Option<u8>) -> Result<()> {
	for feature in &collection.features {
		serde_json::to_writer(&mut writer, &feature.to_json(precision))?;
		writeln!(writer)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoFeature, Geometry};
	use pretty_assertions::assert_eq;

	fn collection() -> GeoCollection {
		GeoCollection::from(vec![
			GeoFeature::new(Geometry::new_point([1.23456, 2.0])),
			GeoFeature::new(Geometry::new_point([3.0, 4.0])),
		])
	}

	#[test]
	fn compact_with_precision() -> Result<()> {
		let mut output = Vec::new();
		write_geojson(&mut output, &collection(), Some(2), false)?;
		assert_eq!(
			String::from_utf8(output)?,
			"{\"features\":[{\"geometry\":{\"coordinates\":[1.23,2.0],\"type\":\"Point\"},\"properties\":{},\"type\":\"Feature\"},{\"geometry\":{\"coordinates\":[3.0,4.0],\"type\":\"Point\"},\"properties\":{},\"type\":\"Feature\"}],\"type\":\"FeatureCollection\"}\n"
		);
		Ok(())
	}

	#[test]
	fn one_feature_per_line() -> Result<()> {
		let mut output = Vec::new();
		write_ndgeojson(&mut output, &collection(), None)?;
		let text = String::from_utf8(output)?;
		assert_eq!(text.lines().count(), 2);
		assert!(text.lines().all(|line| line.starts_with('{')));
		Ok(())
	}
}
