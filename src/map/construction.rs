use az::{Az, Cast};
use std::ops::Rem;

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::map::kdtree::{Node, SpatialMap};
use crate::point::{Axis, Point};
use crate::types::{is_absent, Index};

/// The child link a new node would be attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Link<IDX> {
    Root,
    Low(IDX),
    High(IDX),
}

/// Outcome of an exact-match descent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot<IDX> {
    Occupied(IDX),
    Vacant(Link<IDX>),
}

impl<A, T, const K: usize, IDX> SpatialMap<A, T, K, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Descends from the root until a node with exactly `query` as its key is
    /// found, or until an empty link is reached.
    pub(crate) fn locate(&self, query: &Point<A, K>) -> Slot<IDX> {
        let mut curr = self.root;
        let mut link = Link::Root;
        let mut split_dim = 0;

        while !is_absent(curr) {
            let node = self.node(curr);
            if node.point == *query {
                return Slot::Occupied(curr);
            }

            if query[split_dim] < node.point[split_dim] {
                link = Link::Low(curr);
                curr = node.low;
            } else {
                link = Link::High(curr);
                curr = node.high;
            }

            split_dim = (split_dim + 1).rem(K);
        }

        Slot::Vacant(link)
    }

    fn attach(&mut self, link: Link<IDX>, point: Point<A, K>, value: T) -> IDX {
        assert!(
            self.nodes.len() < <IDX as Index>::capacity(),
            "SpatialMap is full: index type can address at most {} nodes",
            <IDX as Index>::capacity()
        );

        let idx = self.nodes.len().az::<IDX>();
        self.nodes.push(Node::new(point, value));

        match link {
            Link::Root => self.root = idx,
            Link::Low(parent) => self.node_mut(parent).low = idx,
            Link::High(parent) => self.node_mut(parent).high = idx,
        }

        #[cfg(feature = "tracing")]
        event!(Level::TRACE, idx = ?idx, parent = ?link, point = %point, "created node");

        idx
    }

    /// Inserts `value` at `point`, overwriting any value already stored there.
    ///
    /// Returns the previous value if the key was already present, in which case
    /// the size of the map is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if a new node is needed and the map already holds as many nodes as
    /// `IDX` can address.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdmap::{Point, SpatialMap};
    ///
    /// let mut map: SpatialMap<f64, u32, 3> = SpatialMap::new();
    ///
    /// assert_eq!(map.insert(&Point::new([1.0, 2.0, 5.0]), 100), None);
    /// assert_eq!(map.insert(&Point::new([1.0, 2.0, 5.0]), 101), Some(100));
    ///
    /// assert_eq!(map.size(), 1);
    /// assert_eq!(map.at(&Point::new([1.0, 2.0, 5.0])), Ok(&101));
    /// ```
    #[inline]
    pub fn insert(&mut self, point: &Point<A, K>, value: T) -> Option<T> {
        match self.locate(point) {
            Slot::Occupied(idx) => Some(std::mem::replace(&mut self.node_mut(idx).value, value)),
            Slot::Vacant(link) => {
                self.attach(link, *point, value);
                None
            }
        }
    }

    /// Returns a mutable reference to the value at `point`, first inserting the
    /// result of `f` if the key is absent.
    ///
    /// # Panics
    ///
    /// Panics if a new node is needed and the map already holds as many nodes as
    /// `IDX` can address.
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, point: &Point<A, K>, f: F) -> &mut T {
        let idx = match self.locate(point) {
            Slot::Occupied(idx) => idx,
            Slot::Vacant(link) => self.attach(link, *point, f()),
        };

        &mut self.node_mut(idx).value
    }

    /// Returns a mutable reference to the value at `point`, first inserting
    /// `T::default()` if the key is absent.
    ///
    /// Use this to assign a value if the key is new, or adjust the existing one
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdmap::{Point, SpatialMap};
    ///
    /// let mut counts: SpatialMap<f64, u32, 2> = SpatialMap::new();
    ///
    /// for p in [[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]] {
    ///     *counts.get_or_insert_default(&Point::new(p)) += 1;
    /// }
    ///
    /// assert_eq!(counts.size(), 2);
    /// assert_eq!(counts.at(&Point::new([0.0, 0.0])), Ok(&2));
    /// ```
    #[inline]
    pub fn get_or_insert_default(&mut self, point: &Point<A, K>) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(point, T::default)
    }
}
