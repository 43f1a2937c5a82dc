/**
 * Random utilities over a seedable, thread-local generator.
 */

use std::cell::RefCell;
use std::ops::Range;
use std::time::SystemTime;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

thread_local! {
    static RNG: RefCell<Mcg128Xsl64> = RefCell::new(Mcg128Xsl64::new(0));
    static SEED: RefCell<u64> = RefCell::new(0);
}

pub fn seed_from_system_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn current_seed() -> u64 {
    SEED.with(|s| *s.borrow())
}

pub fn set_seed(seed: u64) {
    RNG.with(|rng| {
        *rng.borrow_mut() = Mcg128Xsl64::seed_from_u64(seed);
    });
    SEED.with(|s| {
        *s.borrow_mut() = seed;
    });
}

/// A number in `r`. The range must not be empty.
pub fn rand_range(r: &Range<usize>) -> usize {
    RNG.with(|rng| {
        rng.borrow_mut().gen_range(r.start, r.end)
    })
}

/// True with a probability of `percent` in 100.
pub fn chance(percent: usize) -> bool {
    rand_range(&(0..100)) < percent
}

pub fn sample<T>(s: &[T]) -> &T {
    assert!(!s.is_empty());
    let idx = rand_range(&(0..s.len()));
    &s[idx]
}

pub fn sample_char(charset: &[char]) -> char {
    *sample(charset)
}

pub fn rand_string(len: &Range<usize>, charset: &[char]) -> String {
    let len = rand_range(len);
    (0..len).map(|_| sample_char(charset)).collect()
}

// Tests ///////////////////////////////////////////////////////////////////////
