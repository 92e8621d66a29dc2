//! Corpus-level orchestration for Dybo's Rule evaluation
//!
//! This crate reads the annotated verb corpus, runs the per-verb search from
//! `dybo-core` sequentially or on a rayon pool, and folds the outcomes into
//! corpus totals.

#![warn(missing_docs)]

pub mod aggregator;
pub mod config;
pub mod corpus;
pub mod error;
pub mod evaluator;
pub mod executor;

// Re-export key types
pub use aggregator::{CorpusReport, Summary, VerbReport};
pub use config::EngineConfig;
pub use corpus::{parse_corpus, parse_line, CorpusInput, CorpusLayout, CorpusRecord};
pub use error::{EngineError, Result};
pub use evaluator::CorpusEvaluator;
pub use executor::{ExecutionMode, Executor};

// Re-export from core for convenience
pub use dybo_core::{
    AllomorphyKind, CausativePrefix, EvaluationConfig, Method, StressRule, VerbEntry, VerbOutcome,
};

/// Evaluate corpus text with the given configuration
pub fn evaluate_corpus(text: &str, config: EngineConfig) -> Result<CorpusReport> {
    let records = parse_corpus(text, config.layout)?;
    CorpusEvaluator::new(config).evaluate(&records)
}
