//! Minimal-index search over a mountain sequence behind a metered oracle.
//!
//! A search locates the peak once by bisection, then binary-searches the
//! ascending slope and, only if that misses, the descending slope. Searching
//! left first makes the first hit the leftmost one. Every read goes through a
//! per-search [`ProbeMemo`], so no index is read twice and values seen while
//! locating the peak narrow the slope searches for free.

pub mod budget;
pub mod memo;
pub mod orchestrator;
pub mod peak;
pub mod range;

#[cfg(test)]
mod fixtures;

pub use budget::{ceil_log2, nominal_read_budget, read_ceiling, READ_SLACK};
pub use memo::{Narrowed, ProbeMemo};
pub use orchestrator::{search, search_traced, SearchTrace};
pub use peak::locate_peak;
pub use range::{search_ascending, search_descending, search_range};
