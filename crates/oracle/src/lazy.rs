use std::sync::atomic::{AtomicU64, Ordering};

use summit_types::SearchError;

use crate::{check_index, Oracle};

/// Oracle whose values are computed on demand by a closure.
///
/// The sequence is never materialized, so lengths far beyond what fits in
/// memory are fine.
pub struct LazyOracle<F> {
    len: usize,
    value_at: F,
    reads: AtomicU64,
}

impl<F> LazyOracle<F>
where
    F: Fn(usize) -> i64,
{
    pub fn new(len: usize, value_at: F) -> Self {
        Self {
            len,
            value_at,
            reads: AtomicU64::new(0),
        }
    }
}

impl<F> std::fmt::Debug for LazyOracle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyOracle")
            .field("len", &self.len)
            .field("reads", &self.reads.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl<F> Oracle for LazyOracle<F>
where
    F: Fn(usize) -> i64,
{
    fn length(&self) -> usize {
        self.len
    }

    fn read(&self, index: usize) -> Result<i64, SearchError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        check_index(index, self.len)?;
        Ok((self.value_at)(index))
    }

    fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }
}

/// Value of the synthetic mountain at `index`.
///
/// Even values `0, 2, 4, ..` rise up to `peak`, the peak holds `2·peak − 1`,
/// then odd values fall by 2 per step. With `len = 1000, peak = 500` this is
/// `0, 2, .., 998, 999, 997, .., 1`.
///
/// Values stay inside `i64` for any `index < len <= MAX_SYNTHETIC_LEN`.
pub fn mountain_value(index: usize, peak: usize) -> i64 {
    let (i, p) = (index as i64, peak as i64);
    if i < p {
        2 * i
    } else {
        2 * p - 1 - 2 * (i - p)
    }
}

/// Lazily evaluated synthetic mountain of `len` elements peaking at `peak`.
///
/// Callers must keep `0 < peak < len - 1` for the result to be a valid
/// mountain, and `len <= MAX_SYNTHETIC_LEN` so that every value fits in
/// `i64`. `Config::from_env` enforces both.
pub fn synthetic_mountain(len: usize, peak: usize) -> LazyOracle<impl Fn(usize) -> i64 + Send + Sync> {
    LazyOracle::new(len, move |index| mountain_value(index, peak))
}
