//! Majority vote over the values returned by a k-nearest-neighbour query.

/// Returns the most frequent value in `values`.
///
/// Only `PartialEq` is required of the value type, so the tally is a linear
/// list of distinct values in the order they are first seen. A value replaces
/// the current winner only if its count is strictly higher, so on a tie the
/// value that appears first in `values` wins.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use kdmap::vote::majority;
///
/// assert_eq!(majority(&['b', 'a', 'a']), Some(&'a'));
/// // tie: 'b' was seen first
/// assert_eq!(majority(&['b', 'a', 'a', 'b']), Some(&'b'));
/// assert_eq!(majority::<char>(&[]), None);
/// ```
pub fn majority<T: PartialEq>(values: &[T]) -> Option<&T> {
    let mut tally: Vec<(&T, usize)> = Vec::new();

    for value in values {
        match tally.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => tally.push((value, 1)),
        }
    }

    let mut winner: Option<(&T, usize)> = None;
    for (value, count) in tally {
        if winner.map_or(true, |(_, best)| count > best) {
            winner = Some((value, count));
        }
    }

    winner.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::majority;

    #[test]
    fn picks_the_most_frequent_value() {
        assert_eq!(majority(&[3, 1, 3, 2, 3, 1]), Some(&3));
    }

    #[test]
    fn single_value_wins() {
        assert_eq!(majority(&["only"]), Some(&"only"));
    }

    #[test]
    fn ties_go_to_the_first_encountered_value() {
        assert_eq!(majority(&['a', 'b', 'b', 'a']), Some(&'a'));
        assert_eq!(majority(&['c', 'a', 'b']), Some(&'c'));
    }

    #[test]
    fn later_value_wins_only_with_a_strictly_higher_count() {
        assert_eq!(majority(&['a', 'b', 'b']), Some(&'b'));
    }

    #[test]
    fn empty_input_has_no_winner() {
        assert_eq!(majority::<u8>(&[]), None);
    }

    #[test]
    fn works_with_references() {
        let a = String::from("a");
        let b = String::from("b");
        let values = vec![&b, &a, &b];

        assert_eq!(majority(&values), Some(&&b));
    }
}
