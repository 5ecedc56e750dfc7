partition_point_impl!("std");

// Reference kernel, used as oracle in tests and as baseline in the benchmarks.
pub fn partition_point<T, P>(arr: &[T], pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    arr.partition_point(pred)
}
