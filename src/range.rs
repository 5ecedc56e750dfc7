//! Searches restricted to a window of a larger sorted slice.
//!
//! A [`SortedRange`] is validated once when it is built. Every search on it is infallible and
//! reports positions in the base slice.

use core::ops::Range;

use crate::backend::Backend;
use crate::error::SearchError;
use crate::order;
use crate::scalar;

/// A borrowed `[first, last)` window into a slice that is sorted under some comparator.
///
/// Positions returned by the search methods are indices into the full base slice, so they lie in
/// `first..=last`, the same way an iterator into the container would.
///
/// Sortedness is a precondition that is never checked. Bounds are checked once, on construction;
/// every search on an accepted window is infallible.
#[derive(Debug)]
pub struct SortedRange<'a, T> {
    window: &'a [T],
    first: usize,
}

// Derive would require T: Clone / T: Copy.
impl<T> Clone for SortedRange<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortedRange<'_, T> {}

impl<'a, T> SortedRange<'a, T> {
    /// The whole of `arr`.
    pub fn new(arr: &'a [T]) -> Self {
        Self {
            window: arr,
            first: 0,
        }
    }

    /// The window `[first, last)` of `arr`.
    pub fn from_bounds(arr: &'a [T], first: usize, last: usize) -> Result<Self, SearchError> {
        if first > last || last > arr.len() {
            return Err(SearchError::InvalidBounds {
                first,
                last,
                len: arr.len(),
            });
        }

        Ok(Self {
            window: &arr[first..last],
            first,
        })
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.window
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// `first..last` in base slice positions.
    pub fn bounds(&self) -> Range<usize> {
        self.first..self.first + self.window.len()
    }

    pub fn lower_bound_by<F>(&self, key: &T, is_less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.first + scalar::lower_bound_by(self.window, key, is_less)
    }

    pub fn upper_bound_by<F>(&self, key: &T, is_less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.first + scalar::upper_bound_by(self.window, key, is_less)
    }

    pub fn binary_search_by<F>(&self, key: &T, is_less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        scalar::binary_search_by(self.window, key, is_less)
    }

    pub fn equal_range_by<F>(&self, key: &T, is_less: F) -> Range<usize>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.shift(scalar::equal_range_by(self.window, key, is_less))
    }

    fn shift(&self, range: Range<usize>) -> Range<usize> {
        (self.first + range.start)..(self.first + range.end)
    }
}

impl<'a, T> SortedRange<'a, T>
where
    T: PartialOrd,
{
    pub fn lower_bound(&self, key: &T) -> usize {
        self.lower_bound_by(key, order::less())
    }

    pub fn upper_bound(&self, key: &T) -> usize {
        self.upper_bound_by(key, order::less())
    }

    pub fn binary_search(&self, key: &T) -> bool {
        self.binary_search_by(key, order::less())
    }

    pub fn equal_range(&self, key: &T) -> Range<usize> {
        self.equal_range_by(key, order::less())
    }
}

macro_rules! range_batch_methods {
    ($($op:ident -> $out:ty),*) => {
        paste::paste! {
            $(
                #[doc = "[`SortedRange::" $op "`] for every key."]
                pub fn [<$op _batch>](&self, keys: &[T], backend: Backend) -> Vec<$out>
                where
                    T: PartialOrd,
                {
                    self.[<$op _batch_by>](keys, order::less(), backend)
                }

                #[doc = "[`SortedRange::" $op "_by`] for every key, scheduled by `backend`."]
                pub fn [<$op _batch_by>]<F>(
                    &self,
                    keys: &[T],
                    is_less: F,
                    backend: Backend,
                ) -> Vec<$out>
                where
                    F: Fn(&T, &T) -> bool + Sync,
                {
                    backend.map(keys, |key| self.[<$op _by>](key, &is_less))
                }

                #[doc = "[`SortedRange::" $op "_by`] for every key, written to `out[i]` for `keys[i]`."]
                pub fn [<$op _batch_into>]<F>(
                    &self,
                    keys: &[T],
                    out: &mut [$out],
                    is_less: F,
                    backend: Backend,
                ) -> Result<(), SearchError>
                where
                    F: Fn(&T, &T) -> bool + Sync,
                {
                    backend.map_into(keys, out, |key| self.[<$op _by>](key, &is_less))
                }
            )*
        }
    };
}

impl<'a, T> SortedRange<'a, T>
where
    T: Sync,
{
    range_batch_methods!(
        lower_bound -> usize,
        upper_bound -> usize,
        binary_search -> bool,
        equal_range -> Range<usize>
    );
}
