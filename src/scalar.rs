//! Single key searches.
//!
//! All four primitives are expressed through [`partition_point`], so they agree with each other
//! by construction: `lower_bound <= upper_bound`, `equal_range == lower_bound..upper_bound` and
//! `binary_search` is true exactly when the equal range is non-empty.

use core::ops::Range;

use crate::order;
use crate::partition_point::branchless::partition_point;

/// Returns the position of the first element of `arr` that is not less than `key`.
///
/// `arr` must be sorted in ascending order. If `key` is greater than every element the result is
/// `arr.len()`, which is also the result for an empty slice.
///
/// # Examples
///
/// ```
/// let v = [0, 2, 5, 5, 7, 8];
/// assert_eq!(sorted_search::lower_bound(&v, &5), 2);
/// assert_eq!(sorted_search::lower_bound(&v, &6), 4);
/// ```
#[inline]
pub fn lower_bound<T>(arr: &[T], key: &T) -> usize
where
    T: PartialOrd,
{
    lower_bound_by(arr, key, order::less())
}

/// Returns the position of the first element `elem` of `arr` for which `is_less(elem, key)` is
/// false.
///
/// `arr` must be sorted under `is_less`. The comparator must define a strict weak ordering, see
/// [`crate::order`]. If either precondition is violated the result is unspecified, but always in
/// `0..=arr.len()`.
///
/// Performs at most `ceil(log2(arr.len() + 1))` comparisons.
///
/// # Examples
///
/// ```
/// let desc = [8, 7, 5, 2, 0];
/// assert_eq!(sorted_search::lower_bound_by(&desc, &5, |a, b| a > b), 2);
/// assert_eq!(sorted_search::lower_bound_by(&desc, &9, |a, b| a > b), 0);
/// ```
#[inline]
pub fn lower_bound_by<T, F>(arr: &[T], key: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    partition_point(arr, |elem| is_less(elem, key))
}

/// Returns the position of the first element of `arr` that is greater than `key`.
///
/// `arr` must be sorted in ascending order.
#[inline]
pub fn upper_bound<T>(arr: &[T], key: &T) -> usize
where
    T: PartialOrd,
{
    upper_bound_by(arr, key, order::less())
}

/// Returns the position of the first element `elem` of `arr` for which `is_less(key, elem)` is
/// true, or `arr.len()` if there is none.
///
/// Same preconditions and complexity as [`lower_bound_by`].
///
/// # Examples
///
/// ```
/// let desc = [8, 7, 5, 2, 0];
/// assert_eq!(sorted_search::upper_bound_by(&desc, &5, |a, b| a > b), 3);
/// assert_eq!(sorted_search::upper_bound_by(&desc, &0, |a, b| a > b), 5);
/// ```
#[inline]
pub fn upper_bound_by<T, F>(arr: &[T], key: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    partition_point(arr, |elem| !is_less(key, elem))
}

/// Returns true if `arr` contains an element equal to `key`.
///
/// `arr` must be sorted in ascending order.
#[inline]
pub fn binary_search<T>(arr: &[T], key: &T) -> bool
where
    T: PartialOrd,
{
    binary_search_by(arr, key, order::less())
}

/// Returns true if `arr` contains an element equivalent to `key` under `is_less`.
///
/// Costs one [`lower_bound_by`] plus a single extra comparison.
///
/// # Examples
///
/// ```
/// let desc = [8, 7, 5, 2, 0];
/// assert!(sorted_search::binary_search_by(&desc, &5, |a, b| a > b));
/// assert!(!sorted_search::binary_search_by(&desc, &6, |a, b| a > b));
/// ```
#[inline]
pub fn binary_search_by<T, F>(arr: &[T], key: &T, mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let pos = lower_bound_by(arr, key, &mut is_less);

    // lower_bound already established !is_less(elem, key).
    match arr.get(pos) {
        Some(elem) => !is_less(key, elem),
        None => false,
    }
}

/// Returns the range of elements equal to `key`.
///
/// `arr` must be sorted in ascending order.
#[inline]
pub fn equal_range<T>(arr: &[T], key: &T) -> Range<usize>
where
    T: PartialOrd,
{
    equal_range_by(arr, key, order::less())
}

/// Returns the maximal range of elements equivalent to `key` under `is_less`.
///
/// The result is `lower_bound_by(..)..upper_bound_by(..)`. If no element is equivalent to `key`
/// the range is empty and starts at the position where `key` could be inserted while keeping
/// `arr` sorted.
///
/// # Examples
///
/// ```
/// let desc = [8, 7, 5, 2, 0];
/// assert_eq!(sorted_search::equal_range_by(&desc, &5, |a, b| a > b), 2..3);
/// assert_eq!(sorted_search::equal_range_by(&desc, &4, |a, b| a > b), 3..3);
/// ```
#[inline]
pub fn equal_range_by<T, F>(arr: &[T], key: &T, mut is_less: F) -> Range<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let lo = lower_bound_by(arr, key, &mut is_less);
    // The upper bound is never before the lower bound, only search the tail.
    let hi = lo + upper_bound_by(&arr[lo..], key, &mut is_less);

    lo..hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::greater;

    const DESC: [i32; 5] = [8, 7, 5, 2, 0];

    #[test]
    fn descending_fixture() {
        let lower = (0..10)
            .map(|k| lower_bound_by(&DESC, &k, greater()))
            .collect::<Vec<_>>();
        let upper = (0..10)
            .map(|k| upper_bound_by(&DESC, &k, greater()))
            .collect::<Vec<_>>();
        let found = (0..10)
            .map(|k| binary_search_by(&DESC, &k, greater()))
            .collect::<Vec<_>>();

        assert_eq!(lower, [4, 4, 3, 3, 3, 2, 2, 1, 0, 0]);
        assert_eq!(upper, [5, 4, 4, 3, 3, 3, 2, 2, 1, 0]);
        assert_eq!(
            found,
            [true, false, true, false, false, true, false, true, true, false]
        );
        for k in 0..10 {
            assert_eq!(
                equal_range_by(&DESC, &k, greater()),
                lower[k as usize]..upper[k as usize]
            );
        }
    }

    #[test]
    fn empty() {
        let arr: [u16; 0] = [];
        assert_eq!(lower_bound(&arr, &3), 0);
        assert_eq!(upper_bound(&arr, &3), 0);
        assert!(!binary_search(&arr, &3));
        assert_eq!(equal_range(&arr, &3), 0..0);
    }

    #[test]
    fn duplicates() {
        let arr = [1, 3, 3, 3, 3, 9];
        assert_eq!(equal_range(&arr, &3), 1..5);
        assert_eq!(equal_range(&arr, &0), 0..0);
        assert_eq!(equal_range(&arr, &10), 6..6);
        assert_eq!(equal_range(&arr, &4), 5..5);
    }

    #[test]
    fn ties_under_custom_order() {
        // Sorted by absolute value, -3 and 3 are equivalent.
        let arr = [0, 1, -2, -3, 3, 3, -5];
        let by_abs = |a: &i32, b: &i32| a.abs() < b.abs();

        assert_eq!(equal_range_by(&arr, &-3, by_abs), 3..6);
        assert!(binary_search_by(&arr, &2, by_abs));
        assert!(!binary_search_by(&arr, &4, by_abs));
    }
}
