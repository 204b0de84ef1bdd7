//! Fixed-dimension points used as the keys of a [`SpatialMap`](crate::SpatialMap).

use num_traits::float::FloatCore;
use num_traits::Float;
use std::fmt::{Debug, Display};
use std::ops::{Index, IndexMut};

use crate::distance::{DistanceMetric, Euclidean};
use crate::error::{MapError, Result};

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the first generic parameter, `A`,
/// on [`Point`] and [`SpatialMap`](crate::SpatialMap). This will be [`f64`] or [`f32`].
///
/// Both [`Float`] and [`FloatCore`] are required: the former for square roots,
/// the latter so that distances can be totally ordered with `OrderedFloat`.
/// Call float methods through the trait (`Float::abs(x)`) on a generic `A`.
pub trait Axis: Float + FloatCore + Default + Debug + Display + Copy + Sync + Send {}
impl<T: Float + FloatCore + Default + Debug + Display + Copy + Sync + Send> Axis for T {}

/// A point in `K`-dimensional space.
///
/// Equality is exact, component-wise float equality: two points are the same
/// key only if every coordinate compares equal.
///
/// # Examples
///
/// ```rust
/// use kdmap::Point;
///
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([3.0, 4.0]);
///
/// assert_eq!(a.distance(&b), 5.0);
/// assert_eq!(b[1], 4.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<A, const K: usize> {
    coords: [A; K],
}

impl<A: Axis, const K: usize> Point<A, K> {
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(coords: [A; K]) -> Self {
        Self { coords }
    }

    /// Number of coordinates in the point. Always `K`.
    #[inline]
    pub const fn dimension(&self) -> usize {
        K
    }

    /// Borrows the underlying coordinate array.
    #[inline]
    pub fn coords(&self) -> &[A; K] {
        &self.coords
    }

    /// Iterates over the coordinates in axis order.
    pub fn iter(&self) -> impl Iterator<Item = &A> + '_ {
        self.coords.iter()
    }

    /// Euclidean distance between this point and `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> A {
        Euclidean::dist(&self.coords, &other.coords)
    }
}

impl<A: Axis, const K: usize> From<[A; K]> for Point<A, K> {
    fn from(coords: [A; K]) -> Self {
        Self::new(coords)
    }
}

impl<A: Axis, const K: usize> From<Point<A, K>> for [A; K] {
    fn from(point: Point<A, K>) -> Self {
        point.coords
    }
}

/// Builds a point from a runtime-sized slice.
///
/// Fails with [`MapError::InvalidArgument`] if the slice does not hold exactly
/// `K` coordinates, or if any coordinate is NaN (a NaN key can never be found
/// again once inserted).
///
/// ```rust
/// use kdmap::Point;
///
/// let ok: Result<Point<f64, 2>, _> = Point::try_from(&[1.0, 2.0][..]);
/// assert!(ok.is_ok());
///
/// let short: Result<Point<f64, 3>, _> = Point::try_from(&[1.0, 2.0][..]);
/// assert!(short.is_err());
/// ```
impl<A: Axis, const K: usize> TryFrom<&[A]> for Point<A, K> {
    type Error = MapError;

    fn try_from(slice: &[A]) -> Result<Self> {
        let coords: [A; K] = slice.try_into().map_err(|_| {
            MapError::InvalidArgument(format!(
                "expected {} coordinates, got {}",
                K,
                slice.len()
            ))
        })?;

        if let Some(axis) = coords.iter().position(|&c| Float::is_nan(c)) {
            return Err(MapError::InvalidArgument(format!(
                "coordinate {} is NaN",
                axis
            )));
        }

        Ok(Self { coords })
    }
}

impl<A, const K: usize> Index<usize> for Point<A, K> {
    type Output = A;

    #[inline]
    fn index(&self, axis: usize) -> &A {
        &self.coords[axis]
    }
}

impl<A, const K: usize> IndexMut<usize> for Point<A, K> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut A {
        &mut self.coords[axis]
    }
}

impl<A: Display, const K: usize> Display for Point<A, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (idx, coord) in self.coords.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coord)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MapError;
    use crate::point::Point;

    #[test]
    fn can_access_and_mutate_components() {
        let mut p = Point::new([1.0f64, 2.0, 3.0]);

        assert_eq!(p.dimension(), 3);
        assert_eq!(p[0], 1.0);
        assert_eq!(p[2], 3.0);

        p[1] = 7.5;
        assert_eq!(p.coords(), &[1.0, 7.5, 3.0]);
        assert_eq!(p.iter().copied().collect::<Vec<_>>(), vec![1.0, 7.5, 3.0]);
    }

    #[test]
    fn equality_is_exact_and_component_wise() {
        assert_eq!(Point::new([0.0f64, 1.0]), Point::new([0.0, 1.0]));
        assert_ne!(Point::new([0.0f64, 1.0]), Point::new([1.0, 0.0]));
        assert_ne!(Point::new([0.0f64, 1.0]), Point::new([0.0, 1.0 + f64::EPSILON]));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new([1.0f64, 1.0, 1.0, 1.0]);
        let b = Point::new([0.0f64, 0.0, 0.0, 0.0]);

        assert_eq!(a.distance(&b), 2.0);
        assert_eq!(b.distance(&a), 2.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn try_from_rejects_wrong_length() {
        let res: Result<Point<f64, 3>, _> = Point::try_from(&[1.0, 2.0][..]);

        assert_eq!(
            res,
            Err(MapError::InvalidArgument(
                "expected 3 coordinates, got 2".to_string()
            ))
        );
    }

    #[test]
    fn try_from_rejects_nan() {
        let res: Result<Point<f32, 2>, _> = Point::try_from(&[1.0, f32::NAN][..]);

        assert!(matches!(res, Err(MapError::InvalidArgument(_))));
    }

    #[test]
    fn displays_as_bracketed_list() {
        assert_eq!(Point::new([1.5f64, -2.0]).to_string(), "[1.5, -2]");
    }
}
