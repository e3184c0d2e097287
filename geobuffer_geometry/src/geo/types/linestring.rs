use super::{Coordinates, GeometryTrait, positions_to_json};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::{self, Debug, Formatter};

/// An open polyline. Buffered segment by segment.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
	/// Each pair of consecutive positions, in order.
	pub fn segments(&self) -> impl Iterator<Item = (&Coordinates, &Coordinates)> {
		self.0.windows(2).map(|pair| (&pair[0], &pair[1]))
	}
}

impl GeometryTrait for LineStringGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(
			self.0.len() >= 2,
			"a line needs at least 2 coordinates, got {}",
			self.0.len()
		);
		ensure!(self.0.iter().all(Coordinates::is_finite), "a line must have finite positions");
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		positions_to_json(&self.0, precision)
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}
