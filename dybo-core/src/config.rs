//! Evaluation settings

use serde::{Deserialize, Serialize};

use crate::segment::CausativePrefix;
use crate::stress::StressRule;

/// Knobs that change how a verb is evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Treatment of the causative prefix during root segmentation
    pub causative_prefix: CausativePrefix,
    /// Rule that places stress
    pub stress_rule: StressRule,
}

impl EvaluationConfig {
    /// Set the causative-prefix policy
    pub fn with_causative_prefix(mut self, policy: CausativePrefix) -> Self {
        self.causative_prefix = policy;
        self
    }

    /// Set the stress rule
    pub fn with_stress_rule(mut self, rule: StressRule) -> Self {
        self.stress_rule = rule;
        self
    }
}
