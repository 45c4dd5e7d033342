use anyhow::{Context, Result};
use summit_oracle::{synthetic_mountain, ArrayOracle, BudgetGuard, Oracle, ReadLedger, RecordingOracle};
use summit_search::search_traced;
use summit_types::{Config, SequenceSource};
use tracing::{info, warn};

fn main() -> Result<()> {
    // ── Setup ──
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(false)
        .init();

    let config = Config::from_env()?;

    // ── Oracle ──
    let base: Box<dyn Oracle> = match &config.source {
        SequenceSource::Values(values) => Box::new(ArrayOracle::new(values.clone())),
        SequenceSource::Synthetic { len, peak } => {
            info!(len = %len, peak = %peak, "Using synthetic mountain");
            Box::new(synthetic_mountain(*len, *peak))
        }
    };
    let len = base.length();

    info!(
        len = %len,
        target = %config.target,
        budget = ?config.read_budget,
        record_reads = %config.record_reads,
        "Configuration loaded"
    );

    let ledger = ReadLedger::new();
    let oracle: Box<dyn Oracle> = if config.record_reads {
        Box::new(RecordingOracle::with_ledger(base, ledger.clone()))
    } else {
        base
    };

    // ── Search ──
    let trace = match config.read_budget {
        Some(budget) => {
            let guard = BudgetGuard::new(oracle.as_ref(), budget);
            let trace = search_traced(&guard, config.target);
            let stats = guard.stats();
            info!(
                budget = %stats.budget,
                admitted = %stats.admitted,
                remaining = %stats.remaining,
                exhausted = %stats.is_exhausted,
                "Budget guard summary"
            );
            trace
        }
        None => search_traced(oracle.as_ref(), config.target),
    }
    .context("Search aborted")?;

    let report = trace.report(len, config.target);
    info!(
        result = %report.result,
        peak = %report.peak,
        reads = %report.reads,
        nominal_budget = %report.nominal_budget,
        "Search finished"
    );
    if !report.within_nominal_budget() {
        warn!(
            reads = %report.reads,
            nominal_budget = %report.nominal_budget,
            read_ceiling = %report.read_ceiling,
            "Read count above nominal budget"
        );
    }

    if config.record_reads {
        info!(
            distinct = %ledger.distinct(),
            repeated = %ledger.repeated().len(),
            indices = ?ledger.indices(),
            "Read ledger"
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
