use super::{line_buffer, union_all};
use crate::{BufferError, BufferParams};
use anyhow::Result;
use geobuffer_geometry::{Geometry, MultiPolygonGeometry, PolygonGeometry};
use std::iter::once;

/// Buffers the outer ring and unions it with the polygon itself.
pub fn polygon_buffer(polygon: &PolygonGeometry, params: &BufferParams) -> Result<Geometry> {
	let boundary = boundary_buffer(polygon, params)?;
	merged_geometry(union_all([boundary.to_geo(), polygon.to_geo()]))
}

/// One result per component: its boundary buffer unioned with the whole multipolygon.
pub fn multi_polygon_buffer(multi_polygon: &MultiPolygonGeometry, params: &BufferParams) -> Result<Vec<Geometry>> {
	let whole = multi_polygon.to_geo();
	multi_polygon
		.0
		.iter()
		.map(|component| {
			let boundary = boundary_buffer(component, params)?;
			merged_geometry(union_all(once(boundary.to_geo()).chain(whole.0.iter().cloned())))
		})
		.collect()
}

fn boundary_buffer(polygon: &PolygonGeometry, params: &BufferParams) -> Result<PolygonGeometry> {
	let line = polygon
		.to_line()
		.map_err(|e| BufferError::UnsupportedOperation(format!("no boundary: {e}")))?;
	line_buffer(&line, params)
}

/// Wraps a union result. A result that falls apart is kept as a `MultiPolygon`,
/// unlike [`line_buffer`], which rejects it.
fn merged_geometry(merged: MultiPolygonGeometry) -> Result<Geometry> {
	if merged.0.is_empty() {
		return Err(BufferError::UnsupportedOperation("union of boundary buffer and area is empty".to_string()).into());
	}
	Ok(Geometry::from_polygons(merged.0))
}
