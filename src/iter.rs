//! Borrowing iterator over the entries of a [`SpatialMap`].

use az::Az;

use crate::map::kdtree::SpatialMap;
use crate::point::{Axis, Point};
use crate::types::{is_absent, Index};

/// Pre-order iterator over the `(point, value)` pairs of a [`SpatialMap`].
///
/// Created by [`SpatialMap::iter`]. Yields each node before its low subtree,
/// and the low subtree before the high one.
#[derive(Debug)]
pub struct Iter<'a, A, T, const K: usize, IDX> {
    map: &'a SpatialMap<A, T, K, IDX>,
    stack: Vec<IDX>,
    remaining: usize,
}

impl<'a, A: Axis, T, const K: usize, IDX: Index> Iter<'a, A, T, K, IDX> {
    pub(crate) fn new(map: &'a SpatialMap<A, T, K, IDX>) -> Self {
        let mut stack = Vec::new();
        if !is_absent(map.root) {
            stack.push(map.root);
        }

        Self {
            map,
            stack,
            remaining: map.nodes.len(),
        }
    }
}

impl<'a, A: Axis, T, const K: usize, IDX: Index> Iterator for Iter<'a, A, T, K, IDX> {
    type Item = (&'a Point<A, K>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let map = self.map;
        let node = &map.nodes[idx.az::<usize>()];

        // high goes on first so that the low subtree is popped next
        if !is_absent(node.high) {
            self.stack.push(node.high);
        }
        if !is_absent(node.low) {
            self.stack.push(node.low);
        }
        self.remaining -= 1;

        Some((&node.point, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, A: Axis, T, const K: usize, IDX: Index> ExactSizeIterator
    for Iter<'a, A, T, K, IDX>
{
}
