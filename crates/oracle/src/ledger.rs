use dashmap::DashMap;
use std::sync::Arc;

use summit_types::SearchError;

use crate::Oracle;

/// Thread-safe per-index read counts, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct ReadLedger {
    inner: Arc<DashMap<usize, u64>>,
}

impl ReadLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one read of `index`.
    pub fn record(&self, index: usize) {
        *self.inner.entry(index).or_insert(0) += 1;
    }

    /// Times `index` was read.
    pub fn count(&self, index: usize) -> u64 {
        self.inner.get(&index).map(|r| *r.value()).unwrap_or(0)
    }

    /// Total reads across all indices.
    pub fn total(&self) -> u64 {
        self.inner.iter().map(|r| *r.value()).sum()
    }

    /// Number of distinct indices read.
    pub fn distinct(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Indices read, ascending.
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.inner.iter().map(|r| *r.key()).collect();
        indices.sort_unstable();
        indices
    }

    /// Indices read more than once, ascending.
    pub fn repeated(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .inner
            .iter()
            .filter(|r| *r.value() > 1)
            .map(|r| *r.key())
            .collect();
        indices.sort_unstable();
        indices
    }

    pub fn clear(&self) {
        self.inner.clear();
    }
}

/// Forwards reads to an inner oracle and records each requested index.
///
/// Reads that fail (out of range, budget refusal) are recorded too: the
/// ledger reflects what was asked for, not what succeeded.
#[derive(Debug)]
pub struct RecordingOracle<O> {
    inner: O,
    ledger: ReadLedger,
}

impl<O: Oracle> RecordingOracle<O> {
    pub fn new(inner: O) -> Self {
        Self::with_ledger(inner, ReadLedger::new())
    }

    /// Record into an existing (possibly shared) ledger.
    pub fn with_ledger(inner: O, ledger: ReadLedger) -> Self {
        Self { inner, ledger }
    }

    pub fn ledger(&self) -> &ReadLedger {
        &self.ledger
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: Oracle> Oracle for RecordingOracle<O> {
    fn length(&self) -> usize {
        self.inner.length()
    }

    fn read(&self, index: usize) -> Result<i64, SearchError> {
        self.ledger.record(index);
        self.inner.read(index)
    }

    fn reads(&self) -> u64 {
        self.inner.reads()
    }
}
