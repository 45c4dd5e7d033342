use thiserror::Error;

/// Failures that abort a search. `NotFound` is not one of them: an absent
/// target is reported as [`crate::SearchResult::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The sequence is too short to hold a peak with a neighbor on each side.
    #[error("mountain search needs at least 3 elements, oracle reports {len}")]
    PreconditionViolation { len: usize },

    /// A read was issued outside `[0, len)`. Signals a range-derivation bug;
    /// never retried.
    #[error("read at index {index} outside oracle bounds (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A caller-side budget guard refused the read.
    #[error("read budget of {budget} exhausted")]
    BudgetExhausted { budget: u64 },
}
