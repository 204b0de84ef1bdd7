use az::Cast;

use crate::error::{MapError, Result};
use crate::map::construction::Slot;
use crate::map::kdtree::SpatialMap;
use crate::point::{Axis, Point};
use crate::types::Index;

impl<A, T, const K: usize, IDX> SpatialMap<A, T, K, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Returns `true` if an entry exists whose key is exactly `point`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdmap::{Point, SpatialMap};
    ///
    /// let mut map: SpatialMap<f64, u32, 2> = SpatialMap::new();
    /// map.insert(&Point::new([1.0, 2.0]), 100);
    ///
    /// assert!(map.contains(&Point::new([1.0, 2.0])));
    /// assert!(!map.contains(&Point::new([1.0, 2.5])));
    /// ```
    #[inline]
    pub fn contains(&self, point: &Point<A, K>) -> bool {
        matches!(self.locate(point), Slot::Occupied(_))
    }

    /// Returns a reference to the value stored at `point`, if any.
    pub fn get(&self, point: &Point<A, K>) -> Option<&T> {
        match self.locate(point) {
            Slot::Occupied(idx) => Some(&self.node(idx).value),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to the value stored at `point`, if any.
    pub fn get_mut(&mut self, point: &Point<A, K>) -> Option<&mut T> {
        match self.locate(point) {
            Slot::Occupied(idx) => Some(&mut self.node_mut(idx).value),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns a reference to the value stored at `point`.
    ///
    /// Never inserts. Fails with [`MapError::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdmap::{MapError, Point, SpatialMap};
    ///
    /// let mut map: SpatialMap<f64, u32, 3> = SpatialMap::new();
    /// map.insert(&Point::new([1.0, 0.0, 0.0]), 7);
    ///
    /// assert_eq!(map.at(&Point::new([1.0, 0.0, 0.0])), Ok(&7));
    /// assert!(matches!(
    ///     map.at(&Point::new([0.0, 0.0, 0.0])),
    ///     Err(MapError::KeyNotFound(_))
    /// ));
    /// ```
    pub fn at(&self, point: &Point<A, K>) -> Result<&T> {
        self.get(point)
            .ok_or_else(|| MapError::KeyNotFound(point.to_string()))
    }

    /// Returns a mutable reference to the value stored at `point`.
    ///
    /// Never inserts. Fails with [`MapError::KeyNotFound`] if the key is absent.
    pub fn at_mut(&mut self, point: &Point<A, K>) -> Result<&mut T> {
        self.get_mut(point)
            .ok_or_else(|| MapError::KeyNotFound(point.to_string()))
    }
}
