//! Contains a selection of distance metrics that can be chosen from to measure the distance
//! between a query point and the points stored inside a map.

use num_traits::Float;

use crate::point::Axis;

/// Trait that needs to be implemented by any potential distance
/// metric to be used within queries
pub trait DistanceMetric<A, const K: usize> {
    /// returns the distance between two K-d points, as measured
    /// by a particular distance metric
    fn dist(a: &[A; K], b: &[A; K]) -> A;
}

/// Returns the Euclidean distance between two points.
///
/// This is the metric used by [`knn_query`](crate::SpatialMap::knn_query) and
/// [`knn_vote`](crate::SpatialMap::knn_vote).
///
/// # Examples
///
/// ```rust
/// use kdmap::distance::{DistanceMetric, Euclidean};
///
/// assert_eq!(0f64, Euclidean::dist(&[0f64, 0f64], &[0f64, 0f64]));
/// assert_eq!(1f64, Euclidean::dist(&[0f64, 0f64], &[1f64, 0f64]));
/// assert_eq!(5f64, Euclidean::dist(&[0f64, 0f64], &[3f64, 4f64]));
/// ```
pub struct Euclidean {}

impl<A: Axis, const K: usize> DistanceMetric<A, K> for Euclidean {
    #[inline]
    fn dist(a: &[A; K], b: &[A; K]) -> A {
        Float::sqrt(SquaredEuclidean::dist(a, b))
    }
}

/// Returns the squared euclidean distance between two points.
///
/// Faster than Euclidean distance due to not needing a square root, but still
/// preserves the same distance ordering as with Euclidean distance.
///
/// # Examples
///
/// ```rust
/// use kdmap::distance::{DistanceMetric, SquaredEuclidean};
///
/// assert_eq!(0f32, SquaredEuclidean::dist(&[0f32, 0f32], &[0f32, 0f32]));
/// assert_eq!(1f32, SquaredEuclidean::dist(&[0f32, 0f32], &[1f32, 0f32]));
/// assert_eq!(2f32, SquaredEuclidean::dist(&[0f32, 0f32], &[1f32, 1f32]));
/// ```
pub struct SquaredEuclidean {}

impl<A: Axis, const K: usize> DistanceMetric<A, K> for SquaredEuclidean {
    #[inline]
    fn dist(a: &[A; K], b: &[A; K]) -> A {
        a.iter()
            .zip(b.iter())
            .map(|(&a_val, &b_val)| (a_val - b_val) * (a_val - b_val))
            .fold(A::zero(), std::ops::Add::add)
    }
}

/// Returns the Manhattan / "taxi cab" distance between two points.
///
/// # Examples
///
/// ```rust
/// use kdmap::distance::{DistanceMetric, Manhattan};
///
/// assert_eq!(0f32, Manhattan::dist(&[0f32, 0f32], &[0f32, 0f32]));
/// assert_eq!(1f32, Manhattan::dist(&[0f32, 0f32], &[1f32, 0f32]));
/// assert_eq!(2f32, Manhattan::dist(&[0f32, 0f32], &[1f32, 1f32]));
/// ```
pub struct Manhattan {}

impl<A: Axis, const K: usize> DistanceMetric<A, K> for Manhattan {
    #[inline]
    fn dist(a: &[A; K], b: &[A; K]) -> A {
        a.iter()
            .zip(b.iter())
            .map(|(&a_val, &b_val)| Float::abs(a_val - b_val))
            .fold(A::zero(), std::ops::Add::add)
    }
}
