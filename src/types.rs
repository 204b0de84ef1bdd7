//! Index types used to address the nodes of a [`SpatialMap`](crate::SpatialMap)
use az::Cast;
use num_traits::{PrimInt, Unsigned, Zero};
use std::fmt::Debug;

/// Implemented on `u16`, `u32` and `usize` so that they can be used internally to
/// address the `Vec` of nodes that backs a map.
///
/// Allows `u16`, `u32` or `usize` to be used as the 4th generic parameter of
/// [`SpatialMap`](crate::SpatialMap). If you will be storing fewer than ~65k
/// points, selecting `u16` shrinks every node's child links, which keeps more
/// of the tree in cache. `u32` is the default.
pub trait Index: PrimInt + Unsigned + Zero + Cast<usize> + Debug + Sync + Send {
    /// sentinel value marking an absent child link
    fn max() -> Self;
    /// the maximum number of nodes addressable with this index type
    fn capacity() -> usize;
}

impl Index for u16 {
    fn max() -> u16 {
        u16::MAX
    }
    fn capacity() -> usize {
        u16::MAX as usize
    }
}

impl Index for u32 {
    fn max() -> u32 {
        u32::MAX
    }
    fn capacity() -> usize {
        usize::try_from(u32::MAX).unwrap_or(usize::MAX)
    }
}

impl Index for usize {
    fn max() -> usize {
        usize::MAX
    }
    fn capacity() -> usize {
        usize::MAX
    }
}

#[inline]
pub(crate) fn is_absent<IDX: Index>(x: IDX) -> bool {
    x == <IDX as Index>::max()
}

#[cfg(test)]
mod tests {
    use crate::types::{is_absent, Index};

    #[test]
    fn test_u16() {
        assert_eq!(<u16 as Index>::max(), u16::MAX);
        assert_eq!(u16::capacity(), 65_535);
        assert!(is_absent(u16::MAX));
        assert!(!is_absent(0u16));
    }

    #[test]
    fn test_u32() {
        assert_eq!(<u32 as Index>::max(), u32::MAX);

        #[cfg(target_pointer_width = "64")]
        assert_eq!(u32::capacity(), 4_294_967_295);

        assert!(is_absent(u32::MAX));
        assert!(!is_absent(u32::MAX - 1));
    }

    #[test]
    fn test_usize() {
        assert_eq!(<usize as Index>::max(), usize::MAX);
        assert_eq!(usize::capacity(), usize::MAX);
    }
}
