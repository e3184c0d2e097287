use super::{Coordinates, GeometryTrait, LineStringGeometry, positions_to_json};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::{self, Debug, Formatter};

/// A closed loop of positions: the first position is repeated at the end.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Whether the last position equals the first in both longitude and latitude.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		match (self.0.first(), self.0.last()) {
			(Some(first), Some(last)) => first.x() == last.x() && first.y() == last.y(),
			_ => false,
		}
	}

	/// Appends a copy of the first position unless the ring is already closed.
	///
	/// The ring counts as open when either longitude or latitude differ. Comparison is exact.
	pub fn close(&mut self) {
		if self.is_closed() {
			return;
		}
		if let Some(&first) = self.0.first() {
			self.0.push(first);
		}
	}

	#[must_use]
	pub fn to_geo(&self) -> geo::LineString<f64> {
		self.0.iter().map(geo::Coord::from).collect()
	}

	/// The ring as a line that runs all the way round, back to its first position.
	#[must_use]
	pub fn to_line(&self) -> LineStringGeometry {
		let mut ring = self.clone();
		ring.close();
		LineStringGeometry(ring.0)
	}
}

impl GeometryTrait for RingGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(
			self.0.len() >= 4,
			"a ring needs at least 4 coordinates, got {}",
			self.0.len()
		);
		ensure!(self.is_closed(), "a ring must end where it starts");
		ensure!(self.0.iter().all(Coordinates::is_finite), "a ring must have finite positions");
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		positions_to_json(&self.0, precision)
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(line: geo::LineString<f64>) -> Self {
		line.into_iter().map(Coordinates::from).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn open_square() -> RingGeometry {
		RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10]])
	}

	#[test]
	fn verify() {
		let mut ring = open_square();
		assert!(ring.verify().is_err());
		ring.close();
		assert!(ring.verify().is_ok());

		let error = RingGeometry::from(&[[0, 0], [1, 1], [0, 0]]).verify().unwrap_err();
		assert_eq!(error.to_string(), "a ring needs at least 4 coordinates, got 3");
	}

	#[test]
	fn close_appends_first_coordinate_once() {
		let mut ring = open_square();
		assert!(!ring.is_closed());
		ring.close();
		assert!(ring.is_closed());
		assert_eq!(ring.0.len(), 5);

		ring.close();
		assert_eq!(ring.0.len(), 5);
	}

	#[rstest]
	#[case::same_latitude(&[[0, 5], [1, 0], [2, 5]])]
	#[case::same_longitude(&[[5, 0], [1, 0], [5, 2]])]
	fn one_differing_component_is_open(#[case] positions: &[[i32; 2]; 3]) {
		let mut ring = RingGeometry::from(positions);
		assert!(!ring.is_closed());
		ring.close();
		assert_eq!(ring.0.len(), 4);
	}

	#[test]
	fn close_empty_ring_is_noop() {
		let mut ring = RingGeometry(Vec::new());
		ring.close();
		assert!(ring.0.is_empty());
	}

	#[rstest]
	#[case::open(open_square())]
	#[case::closed(RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]))]
	fn to_line_goes_all_the_way_round(#[case] ring: RingGeometry) {
		let line = ring.to_line();
		assert_eq!(line.0.len(), 5);
		assert_eq!(line.segments().count(), 4);
		assert_eq!(line.0.last(), Some(&Coordinates::new(0.0, 0.0)));
	}
}
