use crate::{BufferParams, geodesy::destination};
use geobuffer_geometry::{Coordinates, PolygonGeometry, RingGeometry};

/// Approximates a circle around `center` by `resolution` spokes in increasing bearing order.
pub fn point_buffer(center: &Coordinates, params: &BufferParams) -> PolygonGeometry {
	let step = 360.0 / f64::from(params.resolution);
	let mut ring = RingGeometry(
		(0..params.resolution)
			.map(|i| destination(center, params.radius, f64::from(i) * step, params.units))
			.collect(),
	);
	ring.close();
	PolygonGeometry::from_ring(ring)
}
