//! Length units for buffer radii.
//!
//! Every unit is defined by the Earth's mean radius expressed in that unit, so a
//! length converts to an angular distance (radians) by a single division.
//!
//! ```rust
//! use geobuffer::Unit;
//!
//! let unit = Unit::try_from_str("Miles").unwrap();
//! assert_eq!(unit, Unit::Miles);
//! assert!((unit.to_meters(1.0) - 1609.344).abs() < 1e-6);
//! ```

use crate::BufferError;
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_008.8;

#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum Unit {
	#[default]
	Kilometers,
	Meters,
	Miles,
	#[cfg_attr(feature = "cli", value(name = "nauticalmiles"))]
	NauticalMiles,
	Degrees,
	Radians,
	Feet,
	Inches,
	Yards,
	Centimeters,
	Millimeters,
}

impl Unit {
	pub fn as_str(&self) -> &'static str {
		match self {
			Unit::Kilometers => "kilometers",
			Unit::Meters => "meters",
			Unit::Miles => "miles",
			Unit::NauticalMiles => "nauticalmiles",
			Unit::Degrees => "degrees",
			Unit::Radians => "radians",
			Unit::Feet => "feet",
			Unit::Inches => "inches",
			Unit::Yards => "yards",
			Unit::Centimeters => "centimeters",
			Unit::Millimeters => "millimeters",
		}
	}

	/// Parses a unit name, case-insensitive. British spellings are accepted.
	pub fn try_from_str(value: &str) -> Result<Self> {
		Ok(match value.to_lowercase().trim() {
			"kilometers" | "kilometres" => Unit::Kilometers,
			"meters" | "metres" => Unit::Meters,
			"miles" => Unit::Miles,
			"nauticalmiles" => Unit::NauticalMiles,
			"degrees" => Unit::Degrees,
			"radians" => Unit::Radians,
			"feet" => Unit::Feet,
			"inches" => Unit::Inches,
			"yards" => Unit::Yards,
			"centimeters" | "centimetres" => Unit::Centimeters,
			"millimeters" | "millimetres" => Unit::Millimeters,
			_ => return Err(BufferError::InvalidArgument(format!("unknown unit '{value}'")).into()),
		})
	}

	/// The Earth's mean radius expressed in this unit.
	pub fn earth_radius(&self) -> f64 {
		match self {
			Unit::Kilometers => EARTH_RADIUS / 1000.0,
			Unit::Meters => EARTH_RADIUS,
			Unit::Miles => EARTH_RADIUS / 1609.344,
			Unit::NauticalMiles => EARTH_RADIUS / 1852.0,
			Unit::Degrees => 360.0 / (2.0 * std::f64::consts::PI),
			Unit::Radians => 1.0,
			Unit::Feet => EARTH_RADIUS * 3.28084,
			Unit::Inches => EARTH_RADIUS * 39.370,
			Unit::Yards => EARTH_RADIUS * 1.0936,
			Unit::Centimeters => EARTH_RADIUS * 100.0,
			Unit::Millimeters => EARTH_RADIUS * 1000.0,
		}
	}

	pub fn to_radians(&self, length: f64) -> f64 {
		length / self.earth_radius()
	}

	pub fn to_meters(&self, length: f64) -> f64 {
		self.to_radians(length) * EARTH_RADIUS
	}
}

impl TryFrom<String> for Unit {
	type Error = anyhow::Error;

	fn try_from(value: String) -> Result<Self> {
		Unit::try_from_str(&value)
	}
}

impl Display for Unit {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	#[rstest]
	#[case(Unit::Kilometers, 1.0, 1000.0)]
	#[case(Unit::Meters, 250.0, 250.0)]
	#[case(Unit::Miles, 1.0, 1609.344)]
	#[case(Unit::NauticalMiles, 2.0, 3704.0)]
	#[case(Unit::Feet, 3.28084, 1.0)]
	#[case(Unit::Yards, 1.0936, 1.0)]
	#[case(Unit::Centimeters, 100.0, 1.0)]
	#[case(Unit::Millimeters, 1000.0, 1.0)]
	#[case(Unit::Radians, 1.0, EARTH_RADIUS)]
	fn to_meters(#[case] unit: Unit, #[case] length: f64, #[case] meters: f64) {
		assert_relative_eq!(unit.to_meters(length), meters, max_relative = 1e-9);
	}

	#[test]
	fn degrees_are_angular() {
		assert_relative_eq!(Unit::Degrees.to_radians(180.0), std::f64::consts::PI, epsilon = 1e-12);
	}

	#[test]
	fn default_is_kilometers() {
		assert_eq!(Unit::default(), Unit::Kilometers);
	}

	#[rstest]
	#[case("kilometers", Unit::Kilometers)]
	#[case("Kilometres", Unit::Kilometers)]
	#[case(" METERS ", Unit::Meters)]
	#[case("nauticalmiles", Unit::NauticalMiles)]
	#[case("inches", Unit::Inches)]
	fn parse(#[case] input: &str, #[case] expected: Unit) {
		assert_eq!(Unit::try_from_str(input).unwrap(), expected);
	}

	#[test]
	fn parse_unknown() {
		let error = Unit::try_from_str("furlongs").unwrap_err();
		assert_eq!(
			error.downcast_ref::<BufferError>(),
			Some(&BufferError::InvalidArgument("unknown unit 'furlongs'".to_string()))
		);
	}

	#[test]
	fn display_round_trips() {
		for unit in [Unit::Kilometers, Unit::NauticalMiles, Unit::Degrees, Unit::Millimeters] {
			assert_eq!(Unit::try_from_str(&unit.to_string()).unwrap(), unit);
		}
	}
}
