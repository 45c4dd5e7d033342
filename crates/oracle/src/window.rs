use std::sync::atomic::{AtomicU64, Ordering};

use summit_types::SearchError;
use tracing::warn;

use crate::Oracle;

/// Restricts reads to the closed window `[lo, hi]` of an inner oracle.
///
/// Any read outside the window fails with `IndexOutOfRange` and is never
/// forwarded. Used to prove a sub-range search stays inside its bounds.
#[derive(Debug)]
pub struct WindowedOracle<O> {
    inner: O,
    lo: usize,
    hi: usize,
    rejected: AtomicU64,
}

impl<O: Oracle> WindowedOracle<O> {
    pub fn new(inner: O, lo: usize, hi: usize) -> Self {
        Self {
            inner,
            lo,
            hi,
            rejected: AtomicU64::new(0),
        }
    }

    /// Reads refused because they fell outside the window.
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: Oracle> Oracle for WindowedOracle<O> {
    fn length(&self) -> usize {
        self.inner.length()
    }

    fn read(&self, index: usize) -> Result<i64, SearchError> {
        if index < self.lo || index > self.hi {
            self.rejected.fetch_add(1, Ordering::Relaxed);
            warn!(index, lo = self.lo, hi = self.hi, "Read outside search window");
            return Err(SearchError::IndexOutOfRange {
                index,
                len: self.inner.length(),
            });
        }
        self.inner.read(index)
    }

    fn reads(&self) -> u64 {
        self.inner.reads()
    }
}
