//! Point-keyed map backed by a k-d tree, for use when the co-ordinates of the keys
//! are floats. [`f64`] or [`f32`] are the types that are supported for use as co-ordinates.

use az::{Az, Cast};

use crate::iter::Iter;
use crate::point::{Axis, Point};
use crate::types::Index;

/// Point-keyed map backed by a k-d tree.
///
/// Each distinct [`Point`] is stored in exactly one node. A node at depth `d`
/// splits on axis `d % K`: keys with a strictly smaller coordinate on that axis
/// live in its low subtree, all others (ties included) in its high subtree.
/// The tree is never rebalanced.
///
/// Nodes live in an arena owned by the map and refer to their children by
/// index, so cloning a map produces a fully independent deep copy.
///
/// `PartialEq` compares structure: two maps holding the same entries are only
/// equal if those entries were first inserted in the same order.
#[derive(Debug, PartialEq)]
pub struct SpatialMap<A, T, const K: usize, IDX = u32> {
    pub(crate) nodes: Vec<Node<A, T, K, IDX>>,
    pub(crate) root: IDX,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<A, T, const K: usize, IDX> {
    pub(crate) point: Point<A, K>,
    pub(crate) value: T,
    pub(crate) low: IDX,
    pub(crate) high: IDX,
}

impl<A: Axis, T, const K: usize, IDX: Index> Node<A, T, K, IDX> {
    pub(crate) fn new(point: Point<A, K>, value: T) -> Self {
        Self {
            point,
            value,
            low: <IDX as Index>::max(),
            high: <IDX as Index>::max(),
        }
    }
}

impl<A: Clone, T: Clone, const K: usize, IDX: Clone> Clone for SpatialMap<A, T, K, IDX> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.nodes.clone_from(&source.nodes);
        self.root.clone_from(&source.root);
    }
}

impl<A, T, const K: usize, IDX> Default for SpatialMap<A, T, K, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, const K: usize, IDX> SpatialMap<A, T, K, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Creates a new, empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdmap::{Point, SpatialMap};
    ///
    /// let mut map: SpatialMap<f64, u32, 3> = SpatialMap::new();
    ///
    /// map.insert(&Point::new([1.0, 2.0, 5.0]), 100);
    ///
    /// assert_eq!(map.size(), 1);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: <IDX as Index>::max(),
        }
    }

    /// Creates a new, empty map and reserves capacity for a specific number of items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the number of nodes that `IDX` can address.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdmap::{Point, SpatialMap};
    ///
    /// let mut map: SpatialMap<f64, u32, 3> = SpatialMap::with_capacity(1_000);
    ///
    /// map.insert(&Point::new([1.0, 2.0, 5.0]), 100);
    ///
    /// assert_eq!(map.size(), 1);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity <= <IDX as Index>::capacity());
        Self {
            nodes: Vec::with_capacity(capacity),
            root: <IDX as Index>::max(),
        }
    }

    /// Returns the number of distinct keys stored in the map
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdmap::{Point, SpatialMap};
    ///
    /// let mut map: SpatialMap<f64, u32, 3> = SpatialMap::new();
    ///
    /// map.insert(&Point::new([1.0, 2.0, 5.0]), 100);
    /// map.insert(&Point::new([1.1, 2.1, 5.1]), 101);
    /// map.insert(&Point::new([1.0, 2.0, 5.0]), 102);
    ///
    /// assert_eq!(map.size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the map holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of coordinates in every key. Always `K`.
    #[inline]
    pub const fn dimension(&self) -> usize {
        K
    }

    /// Removes every entry, releasing all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = <IDX as Index>::max();
    }

    /// Iterate over all `(point, value)` pairs in tree pre-order: each node,
    /// then its low subtree, then its high subtree.
    ///
    /// ```rust
    /// use kdmap::{Point, SpatialMap};
    ///
    /// let mut map: SpatialMap<f64, char, 2> = SpatialMap::new();
    /// map.insert(&Point::new([1.0, 1.0]), 'r');
    /// map.insert(&Point::new([0.0, 5.0]), 'l');
    /// map.insert(&Point::new([2.0, 0.0]), 'h');
    ///
    /// let values: Vec<char> = map.iter().map(|(_, v)| *v).collect();
    /// assert_eq!(values, vec!['r', 'l', 'h']);
    /// ```
    pub fn iter(&self) -> Iter<'_, A, T, K, IDX> {
        Iter::new(self)
    }

    #[inline]
    pub(crate) fn node(&self, idx: IDX) -> &Node<A, T, K, IDX> {
        &self.nodes[idx.az::<usize>()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: IDX) -> &mut Node<A, T, K, IDX> {
        &mut self.nodes[idx.az::<usize>()]
    }
}

impl<'a, A, T, const K: usize, IDX> IntoIterator for &'a SpatialMap<A, T, K, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    type Item = (&'a Point<A, K>, &'a T);
    type IntoIter = Iter<'a, A, T, K, IDX>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, T, const K: usize, IDX> Extend<(Point<A, K>, T)> for SpatialMap<A, T, K, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    fn extend<I: IntoIterator<Item = (Point<A, K>, T)>>(&mut self, iter: I) {
        iter.into_iter().for_each(|(point, value)| {
            self.insert(&point, value);
        });
    }
}

impl<A, T, const K: usize, IDX> FromIterator<(Point<A, K>, T)> for SpatialMap<A, T, K, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    fn from_iter<I: IntoIterator<Item = (Point<A, K>, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
