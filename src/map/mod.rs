//! Mutable k-d tree map, keyed by [`Point`](crate::Point)s of a fixed dimension.
//!
//! Every distinct key occupies one node. Nodes are never rebalanced or removed
//! individually, so the shape of the tree is fully determined by the order in
//! which keys were first inserted.

#[doc(hidden)]
pub mod construction;
pub mod kdtree;
#[doc(hidden)]
pub mod query;

pub use kdtree::SpatialMap;
