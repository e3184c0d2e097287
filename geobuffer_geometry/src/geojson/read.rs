use super::{parse_geojson_object, parse_geojson_value};
use crate::GeoObject;
use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::io::{BufRead, Read};

/// Reads a single GeoJSON object of any type.
pub fn read_geojson(mut reader: impl Read) -> Result<GeoObject> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer).context("reading GeoJSON")?;
	parse_geojson_object(&buffer)
}

fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<GeoObject>> {
	match line {
		// blank lines are separators
		Ok(line) if line.trim().is_empty() => Ok(None),
		Ok(line) => serde_json::from_str::<Value>(&line)
			.map_err(anyhow::Error::from)
			.and_then(|value| parse_geojson_value(&value))
			.map(Some)
			.with_context(|| format!("line {}", index + 1)),
		Err(e) => Err(anyhow!(e).context(format!("line {}", index + 1))),
	}
}

/// Reads newline-delimited GeoJSON, one object per line.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoObject>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeometryError;
	use std::io::{BufReader, Cursor};

	#[test]
	fn read_feature_collection() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let GeoObject::FeatureCollection(collection) = read_geojson(Cursor::new(json))? else {
			panic!("expected a feature collection");
		};
		assert_eq!(collection.features.len(), 1);
		assert_eq!(collection.features[0].geometry.get_type_name(), "Point");
		Ok(())
	}

	#[test]
	fn read_bare_geometry() -> Result<()> {
		let object = read_geojson(Cursor::new(r#"{"type":"LineString","coordinates":[[0,0],[0,1]]}"#))?;
		assert_eq!(object.get_type_name(), "LineString");
		Ok(())
	}

	#[test]
	fn ndgeojson_skips_empty_lines() {
		let json = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]},"properties":{}}"#;
		let input = format!("{json}\n\n  \n{json}");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(results.len(), 2);
		for result in results {
			assert_eq!(result.unwrap().get_type_name(), "Feature");
		}
	}

	#[test]
	fn ndgeojson_reports_line_numbers() {
		let input = "{\"type\":\"Point\",\"coordinates\":[0,0]}\n{\"type\":\"Circle\"}\n";
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(results.len(), 2);
		assert!(results[0].is_ok());

		let error = results[1].as_ref().unwrap_err();
		assert!(format!("{error:#}").starts_with("line 2: "));
		assert_eq!(
			error.downcast_ref::<GeometryError>(),
			Some(&GeometryError::UnsupportedType("Circle".to_string()))
		);
	}
}
