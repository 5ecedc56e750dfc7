partition_point_impl!("branchless");

/// Returns the index of the first element for which `pred` is false.
///
/// `arr` must be partitioned by `pred`: every element for which it returns true precedes every
/// element for which it returns false. If that does not hold the result is some index in
/// `0..=arr.len()`, but which one is unspecified.
///
/// The loop runs exactly `ceil(log2(arr.len() + 1))` times regardless of the predicate outcomes,
/// so every key costs the same number of probes.
pub fn partition_point<T, P>(arr: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // arr.len() + 1 outcomes do not fit a usize, only possible for zero-sized T.
    if arr.len() == usize::MAX {
        let last = arr.len() - 1;
        let pos = halving_search(&arr[..last], &mut pred);
        return if pos == last && pred(&arr[last]) {
            arr.len()
        } else {
            pos
        };
    }

    halving_search(arr, &mut pred)
}

fn halving_search<T, P>(arr: &[T], pred: &mut P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // There are arr.len() + 1 possible outcomes of our search.
    // Invariant: [i+1, i+1+n) contains our desired result.
    let mut n = arr.len() + 1;
    let mut i = usize::MAX;

    while n > 1 {
        // n only ever shrinks by floor(n/2), so it ends at exactly 1 and never skips to 0.
        // i and mid grow by at most as much as n shrinks, n shrinks by arr.len() in total and i
        // starts at -1, thus mid <= arr.len() - 1.
        let mid = i.wrapping_add(n / 2);

        // Split [i+1, i+1+n) into [i+1, i+1+n-floor(n/2)) and [i+1+floor(n/2), i+1+n). Both
        // halves have length n - floor(n/2) and together cover the whole range. If pred holds at
        // mid the result lies in the latter half, otherwise in the former.

        // black_box keeps the select below from being turned back into a branch.
        i = ::core::hint::black_box(if pred(&arr[mid]) { mid } else { i });
        n -= n / 2;
    }

    // [i+1, i+1+n) contains our result, and n == 1.
    i.wrapping_add(1)
}
