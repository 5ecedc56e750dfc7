use std::ops::Range;

use search_test_tools::instantiate_search_tests;
use search_test_tools::Search;

struct SearchImpl {}

impl Search for SearchImpl {
    fn name() -> String {
        "rust_std_partition_point".into()
    }

    fn lower_bound_by<T, F>(arr: &[T], keys: &[T], is_less: F) -> Vec<usize>
    where
        T: Sync,
        F: Fn(&T, &T) -> bool + Sync,
    {
        keys.iter()
            .map(|key| arr.partition_point(|elem| is_less(elem, key)))
            .collect()
    }

    fn upper_bound_by<T, F>(arr: &[T], keys: &[T], is_less: F) -> Vec<usize>
    where
        T: Sync,
        F: Fn(&T, &T) -> bool + Sync,
    {
        keys.iter()
            .map(|key| arr.partition_point(|elem| !is_less(key, elem)))
            .collect()
    }

    fn binary_search_by<T, F>(arr: &[T], keys: &[T], is_less: F) -> Vec<bool>
    where
        T: Sync,
        F: Fn(&T, &T) -> bool + Sync,
    {
        Self::lower_bound_by(arr, keys, &is_less)
            .into_iter()
            .zip(keys)
            .map(|(pos, key)| pos < arr.len() && !is_less(key, &arr[pos]))
            .collect()
    }

    fn equal_range_by<T, F>(arr: &[T], keys: &[T], is_less: F) -> Vec<Range<usize>>
    where
        T: Sync,
        F: Fn(&T, &T) -> bool + Sync,
    {
        Self::lower_bound_by(arr, keys, &is_less)
            .into_iter()
            .zip(keys)
            .map(|(lo, key)| lo..(lo + arr[lo..].partition_point(|elem| !is_less(key, elem))))
            .collect()
    }
}

instantiate_search_tests!(SearchImpl);
