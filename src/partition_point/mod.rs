//! Partition point kernels.
//!
//! Every search primitive in this crate reduces to one question: given a predicate that is true
//! for a prefix of the slice and false for the rest, where does the prefix end? The kernels here
//! answer it in Θ(log N) predicate calls without allocating.

pub trait PartitionPoint {
    fn name() -> String;

    fn partition_point<T, P>(arr: &[T], pred: P) -> usize
    where
        P: FnMut(&T) -> bool;

    fn lower_bound_by<T, F>(arr: &[T], key: &T, is_less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;

    fn upper_bound_by<T, F>(arr: &[T], key: &T, is_less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;
}

macro_rules! partition_point_impl {
    ($name:expr) => {
        pub struct PartitionPointImpl;

        impl crate::partition_point::PartitionPoint for PartitionPointImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn partition_point<T, P>(arr: &[T], pred: P) -> usize
            where
                P: FnMut(&T) -> bool,
            {
                partition_point(arr, pred)
            }

            #[inline]
            fn lower_bound_by<T, F>(arr: &[T], key: &T, mut is_less: F) -> usize
            where
                F: FnMut(&T, &T) -> bool,
            {
                partition_point(arr, |elem| is_less(elem, key))
            }

            #[inline]
            fn upper_bound_by<T, F>(arr: &[T], key: &T, mut is_less: F) -> usize
            where
                F: FnMut(&T, &T) -> bool,
            {
                partition_point(arr, |elem| !is_less(key, elem))
            }
        }
    };
}

pub mod branchless;
pub mod std;
