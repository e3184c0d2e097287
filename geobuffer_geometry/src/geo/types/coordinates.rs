use serde_json::Value;
use std::fmt::{self, Debug, Formatter};

/// A position as longitude and latitude in degrees. Altitude is not kept.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	lon: f64,
	lat: f64,
}

impl Coordinates {
	#[must_use]
	pub fn new(lon: f64, lat: f64) -> Self {
		Self { lon, lat }
	}

	/// Longitude in degrees.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.lon
	}

	/// Latitude in degrees.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.lat
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.lon.is_finite() && self.lat.is_finite()
	}

	/// `[lon, lat]`, each rounded to `precision` decimal places if given.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let round = |value: f64| match precision {
			Some(digits) => {
				let factor = 10f64.powi(i32::from(digits));
				(value * factor).round() / factor
			}
			None => value,
		};
		Value::from(vec![round(self.lon), round(self.lat)])
	}
}

pub(crate) fn positions_to_json(positions: &[Coordinates], precision: Option<u8>) -> Value {
	Value::Array(positions.iter().map(|position| position.to_json(precision)).collect())
}

impl<T: Copy + Into<f64>> From<&[T; 2]> for Coordinates {
	fn from(&[lon, lat]: &[T; 2]) -> Self {
		Self::new(lon.into(), lat.into())
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from([lon, lat]: [f64; 2]) -> Self {
		Self::new(lon, lat)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from((lon, lat): (f64, f64)) -> Self {
		Self::new(lon, lat)
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(coord: geo::Coord) -> Self {
		Self::new(coord.x, coord.y)
	}
}

impl From<geo::Point> for Coordinates {
	fn from(point: geo::Point) -> Self {
		Self::new(point.x(), point.y())
	}
}

impl From<&Coordinates> for geo::Coord {
	fn from(position: &Coordinates) -> Self {
		geo::Coord {
			x: position.lon,
			y: position.lat,
		}
	}
}

impl From<&Coordinates> for geo::Point {
	fn from(position: &Coordinates) -> Self {
		geo::Point::new(position.lon, position.lat)
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{:?}, {:?}]", self.lon, self.lat)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[test]
	fn debug_looks_like_a_position() {
		assert_eq!(format!("{:?}", Coordinates::new(1.0, -2.5)), "[1.0, -2.5]");
	}

	#[rstest]
	#[case(None, json!([1.23456, 2.34567]))]
	#[case(Some(0), json!([1.0, 2.0]))]
	#[case(Some(1), json!([1.2, 2.3]))]
	#[case(Some(3), json!([1.235, 2.346]))]
	fn to_json(#[case] precision: Option<u8>, #[case] expected: Value) {
		assert_eq!(Coordinates::new(1.23456, 2.34567).to_json(precision), expected);
	}

	#[test]
	fn finite() {
		assert!(Coordinates::new(180.0, -90.0).is_finite());
		assert!(!Coordinates::new(f64::NAN, 0.0).is_finite());
		assert!(!Coordinates::new(0.0, f64::INFINITY).is_finite());
	}

	#[test]
	fn geo_conversions() {
		let position = Coordinates::from(&[11, 22]);
		assert_eq!(geo::Coord::from(&position), geo::Coord { x: 11.0, y: 22.0 });
		assert_eq!(Coordinates::from(geo::Point::from(&position)), position);
	}
}
