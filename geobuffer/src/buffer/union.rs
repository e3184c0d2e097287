use geo::{Area, BooleanOps, MultiPolygon, Polygon};
use geobuffer_geometry::MultiPolygonGeometry;

/// Left fold of boolean unions, in iteration order. Zero-area polygons contribute nothing and are skipped.
pub fn union_all(polygons: impl IntoIterator<Item = Polygon<f64>>) -> MultiPolygonGeometry {
	let mut count = 0usize;
	let merged = polygons
		.into_iter()
		.filter(|polygon| polygon.unsigned_area() > 0.0)
		.fold(MultiPolygon::new(Vec::new()), |merged, polygon| {
			count += 1;
			merged.union(&polygon)
		});
	log::trace!("union of {count} polygons has {} parts", merged.0.len());
	MultiPolygonGeometry::from(merged)
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use geo::polygon;

	fn square(x: f64, y: f64, size: f64) -> Polygon<f64> {
		polygon![
			(x: x, y: y),
			(x: x + size, y: y),
			(x: x + size, y: y + size),
			(x: x, y: y + size)
		]
	}

	#[test]
	fn overlapping_squares_merge() {
		let merged = union_all([square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)]);
		assert_eq!(merged.0.len(), 1);
		assert_abs_diff_eq!(merged.to_geo().unsigned_area(), 7.0, epsilon = 1e-9);
	}

	#[test]
	fn disjoint_squares_stay_apart() {
		let merged = union_all([square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0), square(5.5, 5.0, 1.0)]);
		assert_eq!(merged.0.len(), 2);
		assert_abs_diff_eq!(merged.to_geo().unsigned_area(), 2.5, epsilon = 1e-9);
	}

	#[test]
	fn zero_area_polygons_are_ignored() {
		let flat = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0)];
		assert!(union_all([flat.clone()]).0.is_empty());
		assert_eq!(union_all([flat, square(3.0, 3.0, 1.0)]).0.len(), 1);
	}

	#[test]
	fn output_rings_are_closed() {
		let merged = union_all([square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)]);
		for polygon in &merged.0 {
			for ring in &polygon.0 {
				assert!(ring.is_closed());
			}
		}
	}
}
