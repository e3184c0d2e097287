//! Great-circle primitives on a spherical Earth.

use crate::{Unit, units::EARTH_RADIUS};
use geo::{Bearing, Destination, Distance, Haversine, Point};
use geobuffer_geometry::Coordinates;

/// The point `distance` away from `origin`, travelling along `bearing` degrees (0 is north, 90 is east).
pub fn destination(origin: &Coordinates, distance: f64, bearing: f64, unit: Unit) -> Coordinates {
	let point = Haversine.destination(Point::from(origin), bearing, unit.to_meters(distance));
	Coordinates::from(point)
}

/// Initial bearing from `from` to `to`, in degrees within (-180, 180].
pub fn bearing(from: &Coordinates, to: &Coordinates) -> f64 {
	normalize_bearing(Haversine.bearing(Point::from(from), Point::from(to)))
}

/// Great-circle distance between two coordinates, in `unit`.
pub fn distance(from: &Coordinates, to: &Coordinates, unit: Unit) -> f64 {
	let meters = Haversine.distance(Point::from(from), Point::from(to));
	meters / EARTH_RADIUS * unit.earth_radius()
}

fn normalize_bearing(degrees: f64) -> f64 {
	let wrapped = degrees.rem_euclid(360.0);
	if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;

	#[rstest]
	#[case(0.0, 0.0)]
	#[case(90.0, 90.0)]
	#[case(180.0, 180.0)]
	#[case(270.0, -90.0)]
	#[case(-180.0, 180.0)]
	#[case(359.0, -1.0)]
	#[case(-450.0, -90.0)]
	fn normalize(#[case] input: f64, #[case] expected: f64) {
		assert_abs_diff_eq!(normalize_bearing(input), expected, epsilon = 1e-12);
	}

	#[test]
	fn bearings_of_cardinal_directions() {
		let origin = Coordinates::new(0.0, 0.0);
		assert_abs_diff_eq!(bearing(&origin, &Coordinates::new(0.0, 1.0)), 0.0, epsilon = 1e-9);
		assert_abs_diff_eq!(bearing(&origin, &Coordinates::new(1.0, 0.0)), 90.0, epsilon = 1e-9);
		assert_abs_diff_eq!(bearing(&origin, &Coordinates::new(0.0, -1.0)).abs(), 180.0, epsilon = 1e-9);
		assert_abs_diff_eq!(bearing(&origin, &Coordinates::new(-1.0, 0.0)), -90.0, epsilon = 1e-9);
	}

	#[test]
	fn destination_north_along_meridian() {
		let origin = Coordinates::new(0.0, 0.0);
		let target = destination(&origin, 111.195_08, 0.0, Unit::Kilometers);
		assert_abs_diff_eq!(target.x(), 0.0, epsilon = 1e-9);
		assert_abs_diff_eq!(target.y(), 1.0, epsilon = 1e-4);
	}

	#[rstest]
	#[case(Unit::Kilometers, 10.0)]
	#[case(Unit::Miles, 3.0)]
	#[case(Unit::Meters, 500.0)]
	#[case(Unit::Degrees, 0.5)]
	fn destination_keeps_distance(#[case] unit: Unit, #[case] length: f64) {
		let origin = Coordinates::new(13.4, 52.5);
		for angle in [0.0, 45.0, 135.0, -100.0] {
			let target = destination(&origin, length, angle, unit);
			assert_abs_diff_eq!(distance(&origin, &target, unit), length, epsilon = length * 1e-9);
			assert_abs_diff_eq!(bearing(&origin, &target), angle, epsilon = 1e-6);
		}
	}

	#[test]
	fn zero_distance_is_identity() {
		let origin = Coordinates::new(-70.0, 41.0);
		let target = destination(&origin, 0.0, 33.0, Unit::Kilometers);
		assert_abs_diff_eq!(target.x(), origin.x(), epsilon = 1e-12);
		assert_abs_diff_eq!(target.y(), origin.y(), epsilon = 1e-12);
	}
}
