use super::union_all;
use crate::{
	BufferError, BufferParams,
	geodesy::{bearing, destination},
};
use anyhow::Result;
use geobuffer_geometry::{Coordinates, LineStringGeometry, PolygonGeometry, RingGeometry};

/// Buffers every segment into a capsule and unions the capsules in segment order.
///
/// A radius too small for the union to keep any area gives the same ring as radius 0.
pub fn line_buffer(line: &LineStringGeometry, params: &BufferParams) -> Result<PolygonGeometry> {
	if line.0.len() < 2 {
		return Err(BufferError::InvalidGeometry(format!(
			"a line needs at least 2 coordinates, got {}",
			line.0.len()
		))
		.into());
	}

	if params.radius == 0.0 {
		log::debug!("radius is 0, collapsing the line buffer onto the line");
		return Ok(collapsed_ring(line));
	}

	let capsules = line
		.segments()
		.map(|(bottom, top)| segment_buffer(bottom, top, params))
		.collect::<Vec<_>>();
	log::trace!("buffered {} segments", capsules.len());

	let mut parts = union_all(capsules.iter().map(PolygonGeometry::to_geo)).0;
	match (parts.pop(), parts.len()) {
		(Some(polygon), 0) => Ok(polygon),
		(None, _) => {
			log::debug!("segment buffers vanished in the union, collapsing the line buffer onto the line");
			Ok(collapsed_ring(line))
		}
		(Some(_), rest) => Err(BufferError::UnsupportedOperation(format!(
			"union of the segment buffers falls apart into {} polygons",
			rest + 1
		))
		.into()),
	}
}

/// A rectangle along the segment, closed by half circles around both ends.
///
/// The ring starts on the left of `top`, swings around `top` to its right side,
/// returns to the right of `bottom`, swings around `bottom` and ends where it started.
pub fn segment_buffer(bottom: &Coordinates, top: &Coordinates, params: &BufferParams) -> PolygonGeometry {
	let BufferParams { radius, units, .. } = *params;

	let direction = bearing(bottom, top);
	let bottom_left = destination(bottom, radius, direction - 90.0, units);
	let bottom_right = destination(bottom, radius, direction + 90.0, units);
	let top_left = destination(top, radius, direction - 90.0, units);
	let top_right = destination(top, radius, direction + 90.0, units);

	let mut coordinates = vec![top_left];
	coordinates.extend(half_circle(top, &top_left, params));
	coordinates.push(top_right);
	coordinates.push(bottom_right);
	coordinates.extend(half_circle(bottom, &bottom_right, params));
	coordinates.push(bottom_left);
	coordinates.push(top_left);

	PolygonGeometry::from_ring(RingGeometry(coordinates))
}

/// Intermediate spokes of a clockwise half turn around `center`, starting from the bearing towards `start`.
fn half_circle<'a>(
	center: &'a Coordinates,
	start: &Coordinates,
	params: &'a BufferParams,
) -> impl Iterator<Item = Coordinates> + 'a {
	let start_bearing = bearing(center, start);
	let spoke_num = params.spoke_num();
	(1..spoke_num).map(move |k| {
		let spoke_bearing = start_bearing + 180.0 * f64::from(k) / f64::from(spoke_num);
		destination(center, params.radius, spoke_bearing, params.units)
	})
}

/// The line walked forward and back again; the buffer of radius 0.
fn collapsed_ring(line: &LineStringGeometry) -> PolygonGeometry {
	let mut coordinates = line.0.clone();
	coordinates.extend(line.0.iter().rev().skip(1).copied());
	PolygonGeometry::from_ring(RingGeometry(coordinates))
}
