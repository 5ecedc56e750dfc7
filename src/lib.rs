//! Boundary searches over sorted sequences, `lower_bound`, `upper_bound`, `binary_search` and
//! `equal_range`, for any strict weak ordering.
//!
//! Every primitive takes its ordering as an explicit `is_less` function value, the `_by`
//! variants, or defaults to the natural ascending order. Searching a descending range means
//! passing [`order::greater`], the kernels themselves never assume a direction.
//!
//! Each primitive exists as a scalar search, one key against one range, and as a batched search,
//! many independent keys against the same range scheduled by a [`Backend`]. Batched result `i`
//! is bit for bit the scalar result for `keys[i]` on every backend.
//!
//! The searched range must already be sorted under the comparator. This is never verified: on an
//! unsorted range the results are unspecified, but still valid in-bounds positions.

pub mod backend;
pub mod batch;
pub mod error;
pub mod order;
pub mod partition_point;
pub mod range;
pub mod scalar;

pub use backend::Backend;
pub use batch::*;
pub use error::SearchError;
pub use range::SortedRange;
pub use scalar::{
    binary_search, binary_search_by, equal_range, equal_range_by, lower_bound, lower_bound_by,
    upper_bound, upper_bound_by,
};
