//! Sequential execution strategy

use dybo_core::HypothesisSearch;

use crate::{
    aggregator::VerbReport,
    corpus::CorpusRecord,
    error::Result,
    executor::{evaluate_record, ExecutionMode, Executor, Progress},
};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn evaluate(
        &self,
        search: &HypothesisSearch,
        records: &[CorpusRecord],
        progress: Progress<'_>,
    ) -> Result<Vec<VerbReport>> {
        let mut reports = Vec::with_capacity(records.len());

        for record in records {
            let report = evaluate_record(search, record)?;
            progress(&report);
            reports.push(report);
        }

        Ok(reports)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
