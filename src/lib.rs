#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # kdmap
//!
//! A mutable, point-keyed map backed by a k-d tree.
//!
//! Keys are fixed-dimension [`Point`]s of `f64` or `f32` co-ordinates. The map supports
//! exact lookup, insert-or-overwrite, get-or-create, and k-nearest-neighbour queries
//! that can be reduced to a majority vote, which makes it a compact k-NN classifier.
//!
//! The tree is built incrementally: each new key descends from the root, comparing on
//! axis `depth % K` at each level, and becomes a new leaf. It is never rebalanced.
//! Nearest-neighbour queries measure every entry, so results are exact.
//!
//! ## Usage
//! ```rust
//! use kdmap::{Point, SpatialMap};
//!
//! let mut map: SpatialMap<f64, char, 2> = SpatialMap::new();
//!
//! map.insert(&Point::new([0.0, 0.0]), 'a');
//! map.insert(&Point::new([0.0, 1.0]), 'a');
//! map.insert(&Point::new([1.0, 0.0]), 'b');
//! map.insert(&Point::new([1.0, 1.0]), 'b');
//! map.insert(&Point::new([2.0, 2.0]), 'b');
//!
//! assert_eq!(map.size(), 5);
//! assert_eq!(map.at(&Point::new([1.0, 0.0])), Ok(&'b'));
//! assert_eq!(
//!     map.knn_query(&Point::new([0.1, 0.2]), 2),
//!     vec![&'a', &'a']
//! );
//! assert_eq!(map.knn_vote(&Point::new([0.9, 0.9]), 3), Ok(&'b'));
//! ```

pub mod distance;
pub mod error;
pub mod iter;
pub mod map;
pub mod nearest_neighbour;
pub mod point;
pub mod types;
pub mod vote;

pub use crate::error::{MapError, Result};
pub use crate::map::SpatialMap;
pub use crate::nearest_neighbour::NearestNeighbour;
pub use crate::point::{Axis, Point};
