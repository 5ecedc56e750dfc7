//! Batched searches: many keys against one sorted range.
//!
//! Each operation comes in three shapes, `<op>_batch` with the natural ascending order,
//! `<op>_batch_by` with an explicit comparator, and `<op>_batch_into` which writes into a caller
//! owned buffer instead of allocating. Result `i` is always exactly what the scalar `<op>_by`
//! returns for `keys[i]`, whatever the backend. The keys themselves need not be sorted.
//!
//! The only memory used per key is the scalar search state. The range, the keys and the
//! comparator are shared read-only between all workers.

use core::ops::Range;

use crate::backend::Backend;
use crate::error::SearchError;
use crate::order;
use crate::scalar;

macro_rules! batch_search_impl {
    ($op:ident, $out:ty) => {
        paste::paste! {
            #[doc = "[`scalar::" $op "`] for every key, in ascending order."]
            pub fn [<$op _batch>]<T>(arr: &[T], keys: &[T], backend: Backend) -> Vec<$out>
            where
                T: PartialOrd + Sync,
            {
                [<$op _batch_by>](arr, keys, order::less(), backend)
            }

            #[doc = "[`scalar::" $op "_by`] for every key, scheduled by `backend`."]
            pub fn [<$op _batch_by>]<T, F>(
                arr: &[T],
                keys: &[T],
                is_less: F,
                backend: Backend,
            ) -> Vec<$out>
            where
                T: Sync,
                F: Fn(&T, &T) -> bool + Sync,
            {
                backend.map(keys, |key| scalar::[<$op _by>](arr, key, &is_less))
            }

            #[doc = "[`scalar::" $op "_by`] for every key, written to `out[i]` for `keys[i]`."]
            ///
            /// Fails with [`SearchError::LengthMismatch`] if `out` is not exactly as long as
            /// `keys`, in which case `out` is left untouched.
            pub fn [<$op _batch_into>]<T, F>(
                arr: &[T],
                keys: &[T],
                out: &mut [$out],
                is_less: F,
                backend: Backend,
            ) -> Result<(), SearchError>
            where
                T: Sync,
                F: Fn(&T, &T) -> bool + Sync,
            {
                backend.map_into(keys, out, |key| scalar::[<$op _by>](arr, key, &is_less))
            }
        }
    };
}

batch_search_impl!(lower_bound, usize);
batch_search_impl!(upper_bound, usize);
batch_search_impl!(binary_search, bool);
batch_search_impl!(equal_range, Range<usize>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::greater;

    #[test]
    fn descending_fixture_every_backend() {
        let desc = [8u64, 7, 5, 2, 0];
        let keys = (0..10u64).collect::<Vec<_>>();

        for backend in Backend::ALL {
            assert_eq!(
                lower_bound_batch_by(&desc, &keys, greater(), backend),
                [4, 4, 3, 3, 3, 2, 2, 1, 0, 0]
            );
            assert_eq!(
                upper_bound_batch_by(&desc, &keys, greater(), backend),
                [5, 4, 4, 3, 3, 3, 2, 2, 1, 0]
            );
            assert_eq!(
                binary_search_batch_by(&desc, &keys, greater(), backend),
                [true, false, true, false, false, true, false, true, true, false]
            );
            assert_eq!(
                equal_range_batch_by(&desc, &keys, greater(), backend),
                [4..5, 4..4, 3..4, 3..3, 3..3, 2..3, 2..2, 1..2, 0..1, 0..0]
            );
        }
    }

    #[test]
    fn into_buffer() {
        let arr = [1.5f32, 2.0, 2.0, 9.25];
        let keys = [9.25f32, 0.0, 2.0, 100.0];

        for backend in Backend::ALL {
            let mut out = vec![usize::MAX; keys.len()];
            upper_bound_batch_into(&arr, &keys, &mut out, |a: &f32, b: &f32| a < b, backend)
                .unwrap();
            assert_eq!(out, [4, 0, 3, 4]);

            let mut found = vec![false; keys.len() + 1];
            assert_eq!(
                binary_search_batch_into(&arr, &keys, &mut found, |a: &f32, b: &f32| a < b, backend),
                Err(SearchError::LengthMismatch { keys: 4, out: 5 })
            );
        }
    }

    #[test]
    fn empty_inputs() {
        let empty: [i16; 0] = [];
        let keys = [-1i16, 0, 1];

        for backend in Backend::ALL {
            assert_eq!(lower_bound_batch(&empty, &keys, backend), [0, 0, 0]);
            assert_eq!(binary_search_batch(&empty, &keys, backend), [false; 3]);
            assert_eq!(equal_range_batch(&empty, &keys, backend), [0..0, 0..0, 0..0]);
            assert!(upper_bound_batch(&[1i16, 2], &empty, backend).is_empty());
        }
    }
}
