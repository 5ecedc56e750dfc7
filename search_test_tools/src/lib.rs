use std::ops::Range;

/// A batched search implementation under test.
///
/// Every method takes all keys at once and must return one result per key, in key order, equal
/// to what an isolated scalar search for that key would return.
pub trait Search {
    fn name() -> String;

    fn lower_bound_by<T, F>(arr: &[T], keys: &[T], is_less: F) -> Vec<usize>
    where
        T: Sync,
        F: Fn(&T, &T) -> bool + Sync;

    fn upper_bound_by<T, F>(arr: &[T], keys: &[T], is_less: F) -> Vec<usize>
    where
        T: Sync,
        F: Fn(&T, &T) -> bool + Sync;

    fn binary_search_by<T, F>(arr: &[T], keys: &[T], is_less: F) -> Vec<bool>
    where
        T: Sync,
        F: Fn(&T, &T) -> bool + Sync;

    fn equal_range_by<T, F>(arr: &[T], keys: &[T], is_less: F) -> Vec<Range<usize>>
    where
        T: Sync,
        F: Fn(&T, &T) -> bool + Sync;
}

pub use paste;

pub mod patterns;
