use summit_oracle::Oracle;
use summit_types::{SearchError, SearchReport, SearchResult};
use tracing::debug;

use crate::budget::{nominal_read_budget, read_ceiling};
use crate::memo::ProbeMemo;
use crate::peak::locate_peak;
use crate::range::{search_ascending, search_descending};

/// Everything one search learned, beyond the result itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTrace {
    pub result: SearchResult,
    pub peak: usize,
    /// Oracle reads the search issued.
    pub reads: u64,
}

impl SearchTrace {
    pub fn report(&self, len: usize, target: i64) -> SearchReport {
        SearchReport {
            len,
            target,
            peak: self.peak,
            result: self.result,
            reads: self.reads,
            nominal_budget: nominal_read_budget(len),
            read_ceiling: read_ceiling(len),
        }
    }
}

/// Minimal index holding `target` in the mountain behind `oracle`.
///
/// Absence is `Ok(SearchResult::NotFound)`. Errors are fatal: a sequence
/// shorter than 3, or a read the oracle refused.
pub fn search<O: Oracle + ?Sized>(oracle: &O, target: i64) -> Result<SearchResult, SearchError> {
    search_traced(oracle, target).map(|trace| trace.result)
}

/// [`search`], also reporting the peak and the number of reads issued.
pub fn search_traced<O: Oracle + ?Sized>(oracle: &O, target: i64) -> Result<SearchTrace, SearchError> {
    let len = oracle.length();
    let mut memo = ProbeMemo::new();
    // Rejects len < 3 before any read.
    let peak = locate_peak(oracle, len, &mut memo)?;
    debug!(len, peak, reads = memo.reads_issued(), "Peak located");

    // Every index of [0, peak] is below every index of [peak+1, len-1], so a
    // hit on the ascending slope is the leftmost match overall.
    let mut result = search_ascending(oracle, 0, peak, target, &mut memo)?;
    if !result.is_found() {
        result = search_descending(oracle, peak + 1, len - 1, target, &mut memo)?;
    }

    let trace = SearchTrace {
        result,
        peak,
        reads: memo.reads_issued(),
    };
    debug!(
        target,
        result = %trace.result,
        reads = trace.reads,
        budget = nominal_read_budget(len),
        "Search complete"
    );
    Ok(trace)
}
