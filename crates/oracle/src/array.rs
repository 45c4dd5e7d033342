use std::sync::atomic::{AtomicU64, Ordering};

use summit_types::SearchError;

use crate::{check_index, Oracle};

/// Oracle over an owned, fully materialized sequence.
#[derive(Debug, Default)]
pub struct ArrayOracle {
    values: Vec<i64>,
    reads: AtomicU64,
}

impl ArrayOracle {
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            reads: AtomicU64::new(0),
        }
    }

    /// Zero the read counter between runs.
    pub fn reset_reads(&self) {
        self.reads.store(0, Ordering::Relaxed);
    }
}

impl From<Vec<i64>> for ArrayOracle {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl Oracle for ArrayOracle {
    fn length(&self) -> usize {
        self.values.len()
    }

    fn read(&self, index: usize) -> Result<i64, SearchError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        check_index(index, self.values.len())?;
        Ok(self.values[index])
    }

    fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }
}
