//! Metered read-only access to a mountain sequence.
//!
//! The search core only ever sees the [`Oracle`] trait. Concrete sources
//! ([`ArrayOracle`], [`LazyOracle`]) count every read; wrappers add
//! bounds windows ([`WindowedOracle`]), per-index accounting
//! ([`RecordingOracle`]) and caller-side budget enforcement ([`BudgetGuard`]).

pub mod array;
pub mod budget_guard;
pub mod lazy;
pub mod ledger;
pub mod window;

pub use array::ArrayOracle;
pub use budget_guard::{BudgetGuard, BudgetStats};
pub use lazy::{mountain_value, synthetic_mountain, LazyOracle};
pub use ledger::{ReadLedger, RecordingOracle};
pub use window::WindowedOracle;

use summit_types::SearchError;

/// Read-only, metered access to a sequence of integers.
///
/// `length` is free and constant for the lifetime of a search. Every call to
/// `read` counts against the caller's budget, including calls that fail.
pub trait Oracle {
    fn length(&self) -> usize;

    /// Value at `index`. Fails with [`SearchError::IndexOutOfRange`] unless
    /// `index < length()`.
    fn read(&self, index: usize) -> Result<i64, SearchError>;

    /// Reads observed by this oracle so far.
    fn reads(&self) -> u64;
}

impl<O: Oracle + ?Sized> Oracle for &O {
    fn length(&self) -> usize {
        (**self).length()
    }

    fn read(&self, index: usize) -> Result<i64, SearchError> {
        (**self).read(index)
    }

    fn reads(&self) -> u64 {
        (**self).reads()
    }
}

impl<O: Oracle + ?Sized> Oracle for Box<O> {
    fn length(&self) -> usize {
        (**self).length()
    }

    fn read(&self, index: usize) -> Result<i64, SearchError> {
        (**self).read(index)
    }

    fn reads(&self) -> u64 {
        (**self).reads()
    }
}

/// Bounds check shared by the concrete oracles.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), SearchError> {
    if index < len {
        Ok(())
    } else {
        Err(SearchError::IndexOutOfRange { index, len })
    }
}
