use super::{
	Coordinates, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry,
	PolygonGeometry, RingGeometry,
};

/// Lets a geometry be collected from, or converted from a list of, anything its parts convert from,
/// e.g. `RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 0]])`.
macro_rules! parts_from_list {
	($($geometry:ty => $part:ty),* $(,)?) => {$(
		impl<T> FromIterator<T> for $geometry
		where
			$part: From<T>,
		{
			fn from_iter<I: IntoIterator<Item = T>>(parts: I) -> Self {
				Self(parts.into_iter().map(<$part>::from).collect())
			}
		}

		impl<T> From<Vec<T>> for $geometry
		where
			$part: From<T>,
		{
			fn from(parts: Vec<T>) -> Self {
				parts.into_iter().collect()
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $geometry
		where
			$part: From<&'a T>,
		{
			fn from(parts: &'a [T; N]) -> Self {
				parts.iter().collect()
			}
		}
	)*};
}

parts_from_list!(
	LineStringGeometry => Coordinates,
	RingGeometry => Coordinates,
	PolygonGeometry => RingGeometry,
	MultiPointGeometry => PointGeometry,
	MultiLineStringGeometry => LineStringGeometry,
	MultiPolygonGeometry => PolygonGeometry,
);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nested_arrays() {
		let polygon = PolygonGeometry::from(&[[[0, 0], [2, 0], [2, 2], [0, 0]]]);
		assert_eq!(polygon.0[0].0[1], Coordinates::new(2.0, 0.0));

		let multi = MultiLineStringGeometry::from(vec![vec![[0.5, 1.5], [2.5, 3.5]]]);
		assert_eq!(multi.0[0].0, vec![Coordinates::new(0.5, 1.5), Coordinates::new(2.5, 3.5)]);
	}

	#[test]
	fn collect_points() {
		let points: MultiPointGeometry = [(1.0, 2.0), (3.0, 4.0)].into_iter().collect();
		assert_eq!(points.0[1], PointGeometry(Coordinates::new(3.0, 4.0)));
	}
}
