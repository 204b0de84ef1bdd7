//! A result item returned by a query

/// Represents an entry in the results of a nearest neighbour query, with `distance` being the distance of this
/// particular item from the query point, and `item` being the stored value that was found
/// as part of the query.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NearestNeighbour<A, T> {
    /// the distance of the found item from the query point according to the supplied distance metric
    pub distance: A,
    /// the stored value that was found in the query
    pub item: T,
}

impl<A, T> From<NearestNeighbour<A, T>> for (A, T) {
    fn from(elem: NearestNeighbour<A, T>) -> Self {
        (elem.distance, elem.item)
    }
}

#[cfg(test)]
mod tests {
    use crate::nearest_neighbour::NearestNeighbour;

    #[test]
    fn test_from_tuple() {
        let nn: (f32, usize) = NearestNeighbour::<f32, usize> {
            distance: 1.0f32,
            item: 1usize,
        }
        .into();

        assert_eq!(nn.0, 1.0f32);
        assert_eq!(nn.1, 1usize);
    }

    #[test]
    fn test_eq_compares_distance_and_item() {
        let a = NearestNeighbour {
            distance: 1.0f32,
            item: 'a',
        };

        assert_eq!(a, NearestNeighbour { distance: 1.0f32, item: 'a' });
        assert_ne!(a, NearestNeighbour { distance: 1.0f32, item: 'b' });
        assert_ne!(a, NearestNeighbour { distance: 2.0f32, item: 'a' });
    }
}
