use az::Cast;
use ordered_float::OrderedFloat;

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::distance::{DistanceMetric, Euclidean};
use crate::error::{MapError, Result};
use crate::map::kdtree::SpatialMap;
use crate::nearest_neighbour::NearestNeighbour;
use crate::point::{Axis, Point};
use crate::types::Index;
use crate::vote::majority;

impl<A, T, const K: usize, IDX> SpatialMap<A, T, K, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Measures the distance from `query` to the key of every entry in the map,
    /// using the specified distance metric.
    ///
    /// Entries are visited in tree pre-order (see [`iter`](Self::iter)). Every
    /// node is visited; no part of the tree is pruned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdmap::{Point, SpatialMap};
    /// use kdmap::distance::Manhattan;
    ///
    /// let mut map: SpatialMap<f64, u32, 2> = SpatialMap::new();
    /// map.insert(&Point::new([1.0, 1.0]), 100);
    /// map.insert(&Point::new([0.0, 3.0]), 101);
    ///
    /// let all = map.collect_all::<Manhattan>(&Point::new([0.0, 0.0]));
    ///
    /// assert_eq!(all.len(), 2);
    /// assert_eq!((all[0].distance, *all[0].item), (2.0, 100));
    /// assert_eq!((all[1].distance, *all[1].item), (3.0, 101));
    /// ```
    pub fn collect_all<D>(&self, query: &Point<A, K>) -> Vec<NearestNeighbour<A, &T>>
    where
        D: DistanceMetric<A, K>,
    {
        self.iter()
            .map(|(point, item)| NearestNeighbour {
                distance: D::dist(query.coords(), point.coords()),
                item,
            })
            .collect()
    }

    /// Finds the nearest `qty` entries to `query`, using the specified
    /// distance metric.
    ///
    /// Results are sorted by ascending distance. The sort is stable, so entries
    /// at equal distance keep the order in which [`collect_all`](Self::collect_all)
    /// produced them. If `qty` exceeds the size of the map, every entry is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdmap::{Point, SpatialMap};
    /// use kdmap::distance::SquaredEuclidean;
    ///
    /// let mut map: SpatialMap<f64, u32, 3> = SpatialMap::new();
    /// map.insert(&Point::new([1.0, 2.0, 5.0]), 100);
    /// map.insert(&Point::new([2.0, 3.0, 6.0]), 101);
    ///
    /// let nearest = map.nearest_n::<SquaredEuclidean>(&Point::new([1.0, 2.0, 5.1]), 1);
    ///
    /// assert_eq!(nearest.len(), 1);
    /// assert!((nearest[0].distance - 0.01f64).abs() < 1e-9);
    /// assert_eq!(*nearest[0].item, 100);
    /// ```
    pub fn nearest_n<D>(&self, query: &Point<A, K>, qty: usize) -> Vec<NearestNeighbour<A, &T>>
    where
        D: DistanceMetric<A, K>,
    {
        let mut result = self.collect_all::<D>(query);

        // slice::sort_by_key is stable; NaN distances sort last
        result.sort_by_key(|neighbour| OrderedFloat(neighbour.distance));
        result.truncate(qty);

        result
    }

    /// Returns the values of the `k` entries whose keys are closest to `query`
    /// by Euclidean distance, nearest first.
    ///
    /// `k` is clamped to the size of the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdmap::{Point, SpatialMap};
    ///
    /// let mut map: SpatialMap<f64, char, 1> = SpatialMap::new();
    /// map.insert(&Point::new([0.0]), 'a');
    /// map.insert(&Point::new([10.0]), 'b');
    /// map.insert(&Point::new([3.0]), 'c');
    ///
    /// assert_eq!(map.knn_query(&Point::new([4.0]), 2), vec![&'c', &'a']);
    /// assert_eq!(map.knn_query(&Point::new([4.0]), 10).len(), 3);
    /// ```
    pub fn knn_query(&self, query: &Point<A, K>, k: usize) -> Vec<&T> {
        self.nearest_n::<Euclidean>(query, k)
            .into_iter()
            .map(|neighbour| neighbour.item)
            .collect()
    }

    /// Classifies `query` by majority vote among the values of its `k` nearest
    /// entries (Euclidean distance).
    ///
    /// `k` is clamped to the size of the map. The value with the highest count
    /// wins; on a tie, the value that appears first among the nearest
    /// neighbours (nearest first, then traversal order) wins.
    ///
    /// Fails with [`MapError::InvalidArgument`] if the map is empty or `k` is
    /// zero, as there is nothing to vote on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdmap::{Point, SpatialMap};
    ///
    /// let mut map: SpatialMap<f64, char, 2> = SpatialMap::new();
    /// map.insert(&Point::new([0.0, 0.0]), 'a');
    /// map.insert(&Point::new([0.0, 1.0]), 'a');
    /// map.insert(&Point::new([5.0, 5.0]), 'b');
    ///
    /// assert_eq!(map.knn_vote(&Point::new([4.0, 4.0]), 1), Ok(&'b'));
    /// assert_eq!(map.knn_vote(&Point::new([4.0, 4.0]), 3), Ok(&'a'));
    /// ```
    pub fn knn_vote(&self, query: &Point<A, K>, k: usize) -> Result<&T>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(MapError::InvalidArgument(
                "cannot vote over an empty map".to_string(),
            ));
        }
        if k == 0 {
            return Err(MapError::InvalidArgument(
                "k must be at least 1 to vote".to_string(),
            ));
        }

        let k = k.min(self.size());
        let values = self.knn_query(query, k);

        #[cfg(feature = "tracing")]
        event!(Level::DEBUG, k, size = self.size(), query = %query, "knn vote");

        majority(&values).copied().ok_or_else(|| {
            MapError::InvalidArgument("no neighbours found to vote on".to_string())
        })
    }
}
