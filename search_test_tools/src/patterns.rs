use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use rand::prelude::*;

use zipf::ZipfDistribution;

/// Provides a set of patterns useful for testing and benchmarking search algorithms.
/// Currently limited to i32 values. Searches need sorted input, see `sorted` and
/// `sorted_descending`.

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = rand::rngs::StdRng::from(new_seed());

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(size: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    // Few values very often, many values rarely. Long equal runs once sorted.
    if size == 0 {
        return Vec::new();
    }

    let mut rng = rand::rngs::StdRng::from(new_seed());
    let dist = ZipfDistribution::new(size, exponent).unwrap();

    (0..size).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn sorted(mut vals: Vec<i32>) -> Vec<i32> {
    vals.sort();
    vals
}

pub fn sorted_descending(mut vals: Vec<i32>) -> Vec<i32> {
    vals.sort_by_key(|&e| std::cmp::Reverse(e));
    vals
}

/// Search keys for `arr`: a sample of values that are present, their direct neighbors, the type
/// extremes and random values from the whole value range. Not sorted.
pub fn search_keys(arr: &[i32], count: usize) -> Vec<i32> {
    let mut keys = vec![i32::MIN, i32::MAX, 0];

    if !arr.is_empty() {
        let picks = random_uniform(count, 0..(arr.len() as i32));
        for pick in picks {
            let val = arr[pick as usize];
            keys.push(val);
            keys.extend(val.checked_sub(1));
            keys.extend(val.checked_add(1));
        }
    }

    keys.extend(random(count));

    keys
}

/// Makes every random pattern draw a fresh seed, instead of one seed per process.
///
/// Meant for benchmarks. Conflicts with `OVERRIDE_SEED`, which pins the seed for replay.
pub fn disable_fixed_seed() {
    let (seed_type, _) = get_or_init_seed_type_and_value();
    if seed_type == SeedType::ExternalOverride {
        panic!("Using disable_fixed_seed conflicts with the external seed override.");
    }

    *SEED_TYPE_AND_VALUE.lock().unwrap() = Some((SeedType::RandomEachTime, 0));
}

/// The seed random patterns are derived from. Set `OVERRIDE_SEED` to replay the seed a failed
/// test run printed.
pub fn random_init_seed() -> u64 {
    get_or_init_seed_type_and_value().1
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

static SEED_TYPE_AND_VALUE: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn get_or_init_seed_type_and_value() -> (SeedType, u64) {
    let (seed_type, seed_val) = *SEED_TYPE_AND_VALUE.lock().unwrap().get_or_insert_with(|| {
        match env::var("OVERRIDE_SEED") {
            Ok(seed) => (
                SeedType::ExternalOverride,
                u64::from_str(seed.trim()).unwrap(),
            ),
            Err(_) => (SeedType::RandomOncePerProcess, thread_rng().gen()),
        }
    });

    if seed_type == SeedType::RandomEachTime {
        (SeedType::RandomEachTime, thread_rng().gen())
    } else {
        (seed_type, seed_val)
    }
}

fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = rand::rngs::StdRng::from(new_seed());

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
