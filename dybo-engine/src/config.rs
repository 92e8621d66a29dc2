//! Configuration types for the engine

use dybo_core::EvaluationConfig;

use crate::corpus::CorpusLayout;
use crate::ExecutionMode;

/// Engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// How individual verbs are evaluated
    pub evaluation: EvaluationConfig,
    /// Column layout of the corpus
    pub layout: CorpusLayout,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = rayon default)
    pub threads: Option<usize>,
}

impl EngineConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Parallel configuration using every available core
    #[cfg(feature = "parallel")]
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            ..Self::default()
        }
    }

    /// Replace the evaluation settings
    pub fn with_evaluation(mut self, evaluation: EvaluationConfig) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Set the thread count; `0` means the rayon default
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = (threads > 0).then_some(threads);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dybo_core::StressRule;

    #[test]
    fn test_default_is_sequential() {
        let config = EngineConfig::default();
        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
        assert_eq!(config.threads, None);
        assert_eq!(config.layout, CorpusLayout::V1);
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::sequential()
            .with_evaluation(EvaluationConfig::default().with_stress_rule(StressRule::WordFinal))
            .with_threads(0);
        assert_eq!(config.evaluation.stress_rule, StressRule::WordFinal);
        assert_eq!(config.threads, None);
        assert_eq!(config.with_threads(4).threads, Some(4));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_preset() {
        assert_eq!(EngineConfig::parallel().execution_mode, ExecutionMode::Parallel);
    }
}
