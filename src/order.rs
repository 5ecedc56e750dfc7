//! Ordering policies.
//!
//! A comparator is any `Fn(&T, &T) -> bool` that returns true when its first argument is ordered
//! strictly before its second one. It must describe a strict weak ordering: irreflexive,
//! transitive, and with a transitive equivalence relation "neither is less than the other". The
//! searched range must be sorted under the same comparator. Neither property is checked; if
//! either is violated the results are unspecified, but always in bounds.
//!
//! The search kernels only ever call the comparator they are handed. Descending search is done by
//! handing them [`greater`], never by flipping the result of [`less`] internally.

fn lt<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

fn gt<T: PartialOrd>(a: &T, b: &T) -> bool {
    a > b
}

/// Natural ascending order, `a < b`. Used whenever no comparator is given.
pub fn less<T: PartialOrd>() -> fn(&T, &T) -> bool {
    lt::<T>
}

/// Natural descending order, `a > b`.
pub fn greater<T: PartialOrd>() -> fn(&T, &T) -> bool {
    gt::<T>
}

/// Ascending order of the value extracted by `key`.
pub fn by_key<T, K, G>(key: G) -> impl Fn(&T, &T) -> bool + Clone
where
    K: PartialOrd,
    G: Fn(&T) -> K + Clone,
{
    move |a: &T, b: &T| key(a) < key(b)
}

/// The order opposite to `is_less`, by swapping its arguments.
pub fn reversed<T, F>(is_less: F) -> impl Fn(&T, &T) -> bool + Clone
where
    F: Fn(&T, &T) -> bool + Clone,
{
    move |a: &T, b: &T| is_less(b, a)
}

/// `a` and `b` are equivalent under `is_less` if neither is ordered before the other.
#[inline]
pub fn equivalent<T, F>(a: &T, b: &T, mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    !is_less(a, b) && !is_less(b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_orders() {
        assert!(less::<i32>()(&1, &2));
        assert!(!less::<i32>()(&2, &2));
        assert!(greater::<i32>()(&2, &1));
        assert!(!greater::<f64>()(&1.0, &1.0));
    }

    #[test]
    fn key_and_reverse() {
        let by_len = by_key(|s: &&str| s.len());
        assert!(by_len(&"ab", &"abc"));
        assert!(!by_len(&"abc", &"xyz"));

        let rev = reversed(less::<u8>());
        assert!(rev(&3, &2));
        assert!(!rev(&2, &3));
    }

    #[test]
    fn equivalence_under_custom_order() {
        let by_abs = by_key(|x: &i32| x.abs());
        assert!(equivalent(&-4, &4, &by_abs));
        assert!(!equivalent(&-4, &5, &by_abs));
    }
}
