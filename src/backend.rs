//! Execution backends for batched searches.
//!
//! A batched search is a map over independent keys: the result for a key depends only on that
//! key, the sorted range and the comparator. The backend decides how the map is scheduled and
//! nothing else, so every backend produces the same output for the same input.
//!
//! * `Sequential` runs all keys on the calling thread.
//! * `MultiThreaded` splits the keys into one contiguous chunk per rayon worker.
//! * `Accelerator` gives every key its own task that writes its own output slot, the shape of a
//!   device kernel launch with one lane per key.
//!
//! Without the `parallel` feature the two parallel backends run on the calling thread.

use std::env;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace, warn};
use once_cell::sync::OnceCell;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::SearchError;

/// Environment variable read by [`Backend::from_env`].
pub const BACKEND_ENV_VAR: &str = "SORTED_SEARCH_BACKEND";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// One key after the other on the calling thread.
    #[default]
    Sequential,

    /// Contiguous key chunks spread over the rayon thread pool.
    MultiThreaded,

    /// One task per key, each writing its own result slot.
    Accelerator,
}

impl Backend {
    pub const ALL: [Backend; 3] = [
        Backend::Sequential,
        Backend::MultiThreaded,
        Backend::Accelerator,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Sequential => "sequential",
            Backend::MultiThreaded => "multi_threaded",
            Backend::Accelerator => "accelerator",
        }
    }

    pub fn is_parallel(self) -> bool {
        self != Backend::Sequential
    }

    /// Reads the backend from `SORTED_SEARCH_BACKEND`, falling back to the default if the
    /// variable is not set.
    pub fn from_env() -> Result<Backend, SearchError> {
        match env::var(BACKEND_ENV_VAR) {
            Ok(val) => val.parse(),
            Err(_) => Ok(Backend::default()),
        }
    }

    /// [`Backend::from_env`], evaluated once per process. An unparsable value is logged and
    /// replaced by the default.
    pub fn configured() -> Backend {
        static CONFIGURED: OnceCell<Backend> = OnceCell::new();

        *CONFIGURED.get_or_init(|| {
            Backend::from_env().unwrap_or_else(|err| {
                warn!("{err}, using {}", Backend::default());
                Backend::default()
            })
        })
    }

    /// Applies `search` to every key and returns the results in key order.
    pub fn map<T, R, S>(self, keys: &[T], search: S) -> Vec<R>
    where
        T: Sync,
        R: Send,
        S: Fn(&T) -> R + Sync,
    {
        trace!("{self} dispatch: {} keys", keys.len());

        match self {
            #[cfg(feature = "parallel")]
            Backend::MultiThreaded => keys
                .par_iter()
                .with_min_len(chunk_len(keys.len()))
                .map(&search)
                .collect(),
            #[cfg(feature = "parallel")]
            Backend::Accelerator => keys.par_iter().with_max_len(1).map(&search).collect(),
            _ => {
                self.note_sequential_fallback();
                keys.iter().map(search).collect()
            }
        }
    }

    /// Applies `search` to every key, writing the result for `keys[i]` into `out[i]`.
    ///
    /// Fails without touching `out` if it does not have exactly one slot per key.
    pub fn map_into<T, R, S>(self, keys: &[T], out: &mut [R], search: S) -> Result<(), SearchError>
    where
        T: Sync,
        R: Send,
        S: Fn(&T) -> R + Sync,
    {
        if keys.len() != out.len() {
            return Err(SearchError::LengthMismatch {
                keys: keys.len(),
                out: out.len(),
            });
        }

        trace!("{self} dispatch into buffer: {} keys", keys.len());

        match self {
            #[cfg(feature = "parallel")]
            Backend::MultiThreaded => {
                out.par_iter_mut()
                    .zip(keys.par_iter())
                    .with_min_len(chunk_len(keys.len()))
                    .for_each(|(slot, key)| *slot = search(key));
            }
            #[cfg(feature = "parallel")]
            Backend::Accelerator => {
                out.par_iter_mut()
                    .zip(keys.par_iter())
                    .with_max_len(1)
                    .for_each(|(slot, key)| *slot = search(key));
            }
            _ => {
                self.note_sequential_fallback();
                for (slot, key) in out.iter_mut().zip(keys) {
                    *slot = search(key);
                }
            }
        }

        Ok(())
    }

    fn note_sequential_fallback(self) {
        if self.is_parallel() {
            debug!("{self} requested but the parallel feature is disabled, running sequential");
        }
    }
}

// Smallest chunk that still gives every worker at most one chunk.
#[cfg(feature = "parallel")]
fn chunk_len(key_count: usize) -> usize {
    let threads = rayon::current_num_threads().max(1);
    key_count.div_ceil(threads).max(1)
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");

        Backend::ALL
            .into_iter()
            .find(|backend| backend.name() == normalized)
            .ok_or_else(|| SearchError::UnknownBackend(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        for backend in Backend::ALL {
            assert_eq!(backend.name().parse::<Backend>(), Ok(backend));
            assert_eq!(backend.to_string().parse::<Backend>(), Ok(backend));
        }

        assert_eq!("Multi-Threaded".parse::<Backend>(), Ok(Backend::MultiThreaded));
        assert_eq!(" ACCELERATOR ".parse::<Backend>(), Ok(Backend::Accelerator));
        assert_eq!(
            "gpu".parse::<Backend>(),
            Err(SearchError::UnknownBackend("gpu".into()))
        );
    }

    #[test]
    fn default_is_sequential() {
        assert_eq!(Backend::default(), Backend::Sequential);
        assert!(!Backend::Sequential.is_parallel());
        assert!(Backend::Accelerator.is_parallel());
    }

    #[test]
    fn map_preserves_key_order() {
        let keys = (0..10_000u32).rev().collect::<Vec<_>>();
        let expected = keys.iter().map(|k| k * 3).collect::<Vec<_>>();

        for backend in Backend::ALL {
            assert_eq!(backend.map(&keys, |k| k * 3), expected);

            let mut out = vec![0; keys.len()];
            backend.map_into(&keys, &mut out, |k| k * 3).unwrap();
            assert_eq!(out, expected);
        }
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn chunk_len_extremes() {
        assert_eq!(chunk_len(0), 1);
        assert_eq!(chunk_len(1), 1);
        assert!(chunk_len(usize::MAX) >= usize::MAX / rayon::current_num_threads());
    }

    #[test]
    fn map_into_rejects_misaligned_output() {
        let keys = [1, 2, 3];
        let mut out = [7usize; 2];

        for backend in Backend::ALL {
            assert_eq!(
                backend.map_into(&keys, &mut out, |&k| k),
                Err(SearchError::LengthMismatch { keys: 3, out: 2 })
            );
            assert_eq!(out, [7, 7]);
        }
    }
}
