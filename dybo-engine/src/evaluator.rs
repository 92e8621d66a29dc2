//! Corpus evaluator: parse, dispatch to an executor, aggregate

use std::time::Instant;

use dybo_core::HypothesisSearch;
use log::info;

use crate::{
    aggregator::{CorpusReport, VerbReport},
    config::EngineConfig,
    corpus::{CorpusInput, CorpusRecord},
    error::Result,
    executor::{ExecutionMode, Executor, SequentialExecutor},
};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Evaluates whole corpora under one configuration
#[derive(Debug, Clone, Default)]
pub struct CorpusEvaluator {
    search: HypothesisSearch,
    config: EngineConfig,
}

impl CorpusEvaluator {
    /// Create an evaluator for the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self {
            search: HypothesisSearch::new(config.evaluation),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The executor matching the configured mode
    pub fn executor(&self) -> Box<dyn Executor> {
        match self.config.execution_mode {
            ExecutionMode::Sequential => Box::new(SequentialExecutor),
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => Box::new(ParallelExecutor::new(self.config.threads)),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                log::warn!("parallel feature disabled, evaluating sequentially");
                Box::new(SequentialExecutor)
            }
        }
    }

    /// Read, parse and evaluate a corpus
    pub fn evaluate_input(&self, input: CorpusInput) -> Result<CorpusReport> {
        let records = input.parse(self.config.layout)?;
        self.evaluate(&records)
    }

    /// Evaluate already-parsed records
    pub fn evaluate(&self, records: &[CorpusRecord]) -> Result<CorpusReport> {
        self.evaluate_with_progress(records, &|_| {})
    }

    /// Evaluate records, calling `progress` after each verb
    pub fn evaluate_with_progress(
        &self,
        records: &[CorpusRecord],
        progress: &(dyn Fn(&VerbReport) + Sync),
    ) -> Result<CorpusReport> {
        let start = Instant::now();
        let executor = self.executor();

        let reports = executor.evaluate(&self.search, records, progress)?;
        let report = CorpusReport::from_reports(reports);

        info!(
            "evaluated {} verbs ({} excluded) in {:.2?} using {:?} execution",
            report.summary.verbs_evaluated,
            report.summary.verbs_excluded,
            start.elapsed(),
            executor.mode()
        );
        info!(
            "{}/{} forms predicted ({:.1}%), {} verbs at 7/7",
            report.summary.correct_predictions,
            report.summary.forms_predicted,
            report.summary.accuracy() * 100.0,
            report.summary.complete_verbs
        );

        Ok(report)
    }
}
