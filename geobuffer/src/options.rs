//! Buffer options as given by callers, and the resolved parameters the algorithms run on.
//!
//! Options can be built in code or loaded from YAML:
//!
//! ```yaml
//! radius: 2.5
//! units: miles
//! resolution: 32
//! ```

use crate::{BufferError, Unit};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Number of vertices of a full circle when no resolution is given.
pub const DEFAULT_RESOLUTION: u32 = 64;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BufferOptions {
	/// Buffer distance, measured in `units`. Required; zero is allowed.
	#[serde(default)]
	pub radius: Option<f64>,

	/// Unit of `radius`
	#[serde(default)]
	pub units: Unit,

	/// Vertices per full circle; 0 or absent means 64
	#[serde(default)]
	pub resolution: Option<u32>,
}

impl BufferOptions {
	pub fn new(radius: f64) -> Self {
		Self {
			radius: Some(radius),
			..Self::default()
		}
	}

	pub fn with_units(mut self, units: Unit) -> Self {
		self.units = units;
		self
	}

	pub fn with_resolution(mut self, resolution: u32) -> Self {
		self.resolution = Some(resolution);
		self
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening options file {path:?}"))?;
		BufferOptions::from_reader(BufReader::new(file)).with_context(|| format!("parsing options file {path:?}"))
	}

	/// Checks the options and fills in defaults.
	pub fn resolve(&self) -> Result<BufferParams> {
		let radius = self
			.radius
			.ok_or_else(|| BufferError::InvalidArgument("radius is required".to_string()))?;

		let resolution = match self.resolution {
			None | Some(0) => DEFAULT_RESOLUTION,
			Some(resolution) => resolution,
		};

		Ok(BufferParams {
			radius,
			units: self.units,
			resolution,
		})
	}
}

/// Fully resolved buffer parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BufferParams {
	pub radius: f64,
	pub units: Unit,
	pub resolution: u32,
}

impl BufferParams {
	/// Spokes per half circle, used for the rounded caps of line buffers.
	pub fn spoke_num(&self) -> u32 {
		self.resolution / 2
	}
}
