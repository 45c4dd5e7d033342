//! Read-count bounds for one search.
//!
//! Locating the peak costs at most two reads per halving, so `2·⌈log₂n⌉`.
//! The slopes hold `a` and `b = n − a` elements; binary search over them costs
//! at most `⌊log₂a⌋ + 1 + ⌊log₂b⌋ + 1 ≤ 2·log₂n`. Hence the hard ceiling of
//! `4·⌈log₂n⌉`. Reusing peak probes narrows the slopes before they are read,
//! but the `3·⌈log₂n⌉` figure is not a guarantee for long sequences.

/// Slack on top of `3·⌈log₂n⌉` for the nominal budget.
pub const READ_SLACK: u64 = 3;

/// `⌈log₂n⌉`, with `ceil_log2(0) == ceil_log2(1) == 0`.
pub fn ceil_log2(n: usize) -> u64 {
    if n <= 1 {
        0
    } else {
        u64::from(usize::BITS - (n - 1).leading_zeros())
    }
}

/// Proven upper bound on reads for a sequence of length `n`.
pub fn read_ceiling(n: usize) -> u64 {
    4 * ceil_log2(n)
}

/// Nominal budget `3·⌈log₂n⌉ + READ_SLACK`.
///
/// Every search on a sequence of at most 64 elements fits, as do searches
/// that resolve near the peak. Targets that miss the ascending slope and sit
/// deep in the descending one can exceed it while staying under
/// [`read_ceiling`]: at `n = 1000` such a search takes 35 reads against a
/// nominal 33 (ceiling 40), and at `n = 2²⁰` it takes up to 75 against 63
/// (ceiling 80). Budgets that must never trip belong at [`read_ceiling`].
pub fn nominal_read_budget(n: usize) -> u64 {
    3 * ceil_log2(n) + READ_SLACK
}
