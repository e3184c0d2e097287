use super::{GeometryTrait, LineStringGeometry, RingGeometry, parts_to_json, verify_parts};
use anyhow::{Result, anyhow, ensure};
use serde_json::Value;
use std::fmt::{self, Debug, Formatter};

/// An outer ring followed by zero or more hole rings.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// A polygon without holes.
	#[must_use]
	pub fn from_ring(ring: RingGeometry) -> Self {
		Self(vec![ring])
	}

	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	/// Closes every ring that does not end on its first position.
	pub fn close(&mut self) {
		self.0.iter_mut().for_each(RingGeometry::close);
	}

	#[must_use]
	pub fn to_geo(&self) -> geo::Polygon<f64> {
		let (exterior, holes) = match self.0.split_first() {
			Some((exterior, holes)) => (exterior.to_geo(), holes.iter().map(RingGeometry::to_geo).collect::<Vec<_>>()),
			None => (geo::LineString::new(Vec::new()), Vec::new()),
		};
		geo::Polygon::new(exterior, holes)
	}

	/// The outer ring as a closed line. Holes are left out.
	pub fn to_line(&self) -> Result<LineStringGeometry> {
		self
			.exterior()
			.map(RingGeometry::to_line)
			.ok_or_else(|| anyhow!("a polygon needs an outer ring"))
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "a polygon needs an outer ring");
		verify_parts(&self.0, "ring")
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		parts_to_json(&self.0, precision)
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(polygon: geo::Polygon<f64>) -> Self {
		let (exterior, holes) = polygon.into_inner();
		std::iter::once(exterior).chain(holes).map(RingGeometry::from).collect()
	}
}
