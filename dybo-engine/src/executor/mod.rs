//! Execution strategies for corpus evaluation

use dybo_core::HypothesisSearch;
use log::{debug, info};

use crate::aggregator::VerbReport;
use crate::corpus::CorpusRecord;
use crate::error::{EngineError, Result};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One verb after another on the calling thread
    #[default]
    Sequential,
    /// Verbs spread over a rayon thread pool
    Parallel,
}

/// Callback invoked once per finished verb
pub type Progress<'a> = &'a (dyn Fn(&VerbReport) + Sync);

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Evaluate every record, returning reports in corpus order
    fn evaluate(
        &self,
        search: &HypothesisSearch,
        records: &[CorpusRecord],
        progress: Progress<'_>,
    ) -> Result<Vec<VerbReport>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Evaluate one corpus record
pub fn evaluate_record(search: &HypothesisSearch, record: &CorpusRecord) -> Result<VerbReport> {
    let outcome = search
        .evaluate_entry(&record.entry)
        .map_err(|source| EngineError::Verb {
            line: record.line,
            label: record.entry.label.clone(),
            source,
        })?;

    let report = VerbReport::new(record, outcome);
    match report.exclusion() {
        Some(kind) => info!(
            "{} {} {}: {kind}, verb not evaluated",
            report.infinitive, report.template, report.label
        ),
        None => debug!(
            "line {}: {} scored {}/7",
            report.line,
            report.label,
            report.score()
        ),
    }

    Ok(report)
}
