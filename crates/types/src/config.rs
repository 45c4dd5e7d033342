use anyhow::{bail, Context, Result};

/// Demo runner configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // ── Sequence ──
    pub source: SequenceSource,

    // ── Query ──
    pub target: i64,

    // ── Metering ──
    /// Caller-side read cap. `None` leaves reads unguarded.
    pub read_budget: Option<u64>,
    /// Keep a per-index read ledger for the run.
    pub record_reads: bool,
}

/// Where the mountain comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceSource {
    /// Explicit values from `MOUNTAIN_VALUES`.
    Values(Vec<i64>),
    /// Computed on demand: `2i` up to the peak, odd values descending after it.
    Synthetic { len: usize, peak: usize },
}

const DEFAULT_SYNTHETIC_LEN: &str = "1000";

/// Longest synthetic mountain whose values all fit in `i64`.
pub const MAX_SYNTHETIC_LEN: usize = (i64::MAX / 2) as usize;

impl Config {
    /// Load configuration from environment variables.
    /// Call `dotenvy::dotenv().ok()` before calling this.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = match lookup("MOUNTAIN_VALUES").filter(|s| !s.trim().is_empty()) {
            Some(raw) => SequenceSource::Values(parse_values(&raw)?),
            None => {
                let len: usize = var_or(&lookup, "SYNTHETIC_LEN", DEFAULT_SYNTHETIC_LEN)
                    .trim()
                    .parse()
                    .context("Invalid SYNTHETIC_LEN")?;
                let peak: usize = match lookup("SYNTHETIC_PEAK") {
                    Some(raw) => raw.trim().parse().context("Invalid SYNTHETIC_PEAK")?,
                    None => len / 2,
                };
                if len > MAX_SYNTHETIC_LEN {
                    bail!("SYNTHETIC_LEN {len} exceeds {MAX_SYNTHETIC_LEN}");
                }
                if len < 3 || peak == 0 || peak >= len - 1 {
                    bail!("Synthetic mountain needs len >= 3 and 0 < peak < len - 1 (len {len}, peak {peak})");
                }
                SequenceSource::Synthetic { len, peak }
            }
        };

        let target = var(&lookup, "SEARCH_TARGET")?
            .trim()
            .parse()
            .context("Invalid SEARCH_TARGET")?;

        let read_budget = match lookup("READ_BUDGET").filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse().context("Invalid READ_BUDGET")?),
            None => None,
        };

        Ok(Config {
            source,
            target,
            read_budget,
            record_reads: var_or(&lookup, "RECORD_READS", "false")
                .parse()
                .unwrap_or(false),
        })
    }
}

/// Parse a comma-separated list of integers, e.g. `"1,2,3,4,5,3,1"`.
pub fn parse_values(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|entry| {
            entry
                .trim()
                .parse::<i64>()
                .with_context(|| format!("Invalid mountain value: {entry}"))
        })
        .collect()
}

fn var<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).with_context(|| format!("Missing environment variable: {name}"))
}

fn var_or<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).unwrap_or_else(|| default.to_string())
}
