//! Parallel execution strategy

use dybo_core::HypothesisSearch;
use rayon::prelude::*;

use crate::{
    aggregator::VerbReport,
    corpus::CorpusRecord,
    error::{EngineError, Result},
    executor::{evaluate_record, ExecutionMode, Executor, Progress},
};

/// Parallel multi-threaded executor
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a parallel executor; `None` uses the global rayon pool
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    fn evaluate_parallel(
        &self,
        search: &HypothesisSearch,
        records: &[CorpusRecord],
        progress: Progress<'_>,
    ) -> Result<Vec<VerbReport>> {
        // Indexed collect keeps corpus order
        records
            .par_iter()
            .map(|record| {
                let report = evaluate_record(search, record)?;
                progress(&report);
                Ok(report)
            })
            .collect::<Result<Vec<_>>>()
    }
}

impl Executor for ParallelExecutor {
    fn evaluate(
        &self,
        search: &HypothesisSearch,
        records: &[CorpusRecord],
        progress: Progress<'_>,
    ) -> Result<Vec<VerbReport>> {
        match self.threads {
            None => self.evaluate_parallel(search, records, progress),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?;
                pool.install(|| self.evaluate_parallel(search, records, progress))
            }
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
