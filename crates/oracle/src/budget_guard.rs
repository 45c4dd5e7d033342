use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use summit_types::SearchError;
use tracing::{error, info};

use crate::Oracle;

/// Caller-side guard that caps the number of reads forwarded to an oracle.
///
/// The search core never looks at a budget; callers that must enforce one
/// wrap their oracle in a guard. Once `budget` reads have been admitted, every
/// further read fails with [`SearchError::BudgetExhausted`] and the guard
/// stays exhausted until [`BudgetGuard::reset`].
#[derive(Debug)]
pub struct BudgetGuard<O> {
    // ── Config ──
    inner: O,
    budget: u64,

    // ── State ──
    admitted: AtomicU64,
    refused: AtomicU64,
    exhausted: AtomicBool,
}

impl<O: Oracle> BudgetGuard<O> {
    /// Wrap `inner`, admitting at most `budget` reads.
    pub fn new(inner: O, budget: u64) -> Self {
        Self {
            inner,
            budget,
            admitted: AtomicU64::new(0),
            refused: AtomicU64::new(0),
            exhausted: AtomicBool::new(false),
        }
    }

    /// Reads still available before the guard refuses.
    pub fn remaining(&self) -> u64 {
        self.budget
            .saturating_sub(self.admitted.load(Ordering::Relaxed))
    }

    /// Whether a read has been refused since the last reset.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted.load(Ordering::Relaxed)
    }

    /// Clear counters and the exhausted flag (e.g. between searches).
    pub fn reset(&self) {
        self.admitted.store(0, Ordering::Relaxed);
        self.refused.store(0, Ordering::Relaxed);
        self.exhausted.store(false, Ordering::Relaxed);
    }

    /// Current stats for logging.
    pub fn stats(&self) -> BudgetStats {
        BudgetStats {
            budget: self.budget,
            admitted: self.admitted.load(Ordering::Relaxed),
            refused: self.refused.load(Ordering::Relaxed),
            remaining: self.remaining(),
            is_exhausted: self.is_exhausted(),
        }
    }

    pub fn into_inner(self) -> O {
        self.inner
    }

    fn refuse(&self, index: usize) -> SearchError {
        self.refused.fetch_add(1, Ordering::Relaxed);
        if !self.exhausted.swap(true, Ordering::Relaxed) {
            error!(
                budget = %self.budget,
                index,
                "Read budget exhausted, refusing further reads"
            );
        }
        SearchError::BudgetExhausted {
            budget: self.budget,
        }
    }
}

impl<O: Oracle> Oracle for BudgetGuard<O> {
    fn length(&self) -> usize {
        self.inner.length()
    }

    fn read(&self, index: usize) -> Result<i64, SearchError> {
        let admitted = self
            .admitted
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |used| {
                (used < self.budget).then_some(used + 1)
            });

        match admitted {
            Ok(used) => {
                if used + 1 == self.budget {
                    info!(budget = %self.budget, "Last read within budget admitted");
                }
                self.inner.read(index)
            }
            Err(_) => Err(self.refuse(index)),
        }
    }

    fn reads(&self) -> u64 {
        self.inner.reads()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStats {
    pub budget: u64,
    pub admitted: u64,
    pub refused: u64,
    pub remaining: u64,
    pub is_exhausted: bool,
}
