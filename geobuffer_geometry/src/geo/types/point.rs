use super::{Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::{self, Debug, Formatter};

/// A single position; its buffer is a circle around it.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl GeometryTrait for PointGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(self.0.is_finite(), "a position must be finite, got {:?}", self.0);
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		self.0.to_json(precision)
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
