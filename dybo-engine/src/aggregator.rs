//! Per-verb reports and corpus totals
//!
//! Totals form a monoid: [`Summary::identity`] is neutral for
//! [`Summary::combine`], and `combine` is associative. Sequential and
//! parallel runs therefore agree however the verbs are grouped.

use dybo_core::{AccentHypothesis, AllomorphyKind, Method, SearchOutcome, VerbOutcome, FORM_COUNT};
use serde::{Deserialize, Serialize};

use crate::corpus::CorpusRecord;

/// Corpus-level totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Correctly predicted forms over all evaluated verbs
    pub correct_predictions: usize,
    /// Forms of evaluated verbs, seven per verb
    pub forms_predicted: usize,
    /// Verbs with all seven forms predicted
    pub complete_verbs: usize,
    /// Verbs that were searched
    pub verbs_evaluated: usize,
    /// Verbs skipped because of allomorphy
    pub verbs_excluded: usize,
}

impl Summary {
    /// Neutral element
    pub fn identity() -> Self {
        Self::default()
    }

    /// Associative combination of two partial totals
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            correct_predictions: self.correct_predictions + other.correct_predictions,
            forms_predicted: self.forms_predicted + other.forms_predicted,
            complete_verbs: self.complete_verbs + other.complete_verbs,
            verbs_evaluated: self.verbs_evaluated + other.verbs_evaluated,
            verbs_excluded: self.verbs_excluded + other.verbs_excluded,
        }
    }

    /// Totals contributed by a single verb
    pub fn of(outcome: &VerbOutcome) -> Self {
        match outcome {
            VerbOutcome::Evaluated(search) => {
                let score = search.evaluation.score();
                Self {
                    correct_predictions: score,
                    forms_predicted: FORM_COUNT,
                    complete_verbs: usize::from(score == FORM_COUNT),
                    verbs_evaluated: 1,
                    verbs_excluded: 0,
                }
            }
            VerbOutcome::Excluded(_) => Self {
                verbs_excluded: 1,
                ..Self::identity()
            },
        }
    }

    /// Share of forms predicted correctly
    pub fn accuracy(&self) -> f64 {
        if self.forms_predicted == 0 {
            0.0
        } else {
            self.correct_predictions as f64 / self.forms_predicted as f64
        }
    }
}

/// Outcome of one corpus line together with the facts needed to report it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbReport {
    /// 1-based corpus line
    pub line: usize,
    /// Identifier label
    pub label: String,
    /// Orthographic infinitive
    pub infinitive: String,
    /// Gloss template
    pub template: String,
    /// Result of the search
    pub outcome: VerbOutcome,
}

impl VerbReport {
    /// Pair a corpus record with its outcome
    pub fn new(record: &CorpusRecord, outcome: VerbOutcome) -> Self {
        Self {
            line: record.line,
            label: record.entry.label.clone(),
            infinitive: record.entry.infinitive().to_string(),
            template: record.entry.template.clone(),
            outcome,
        }
    }

    /// Search outcome, unless the verb was excluded
    pub fn search(&self) -> Option<&SearchOutcome> {
        match &self.outcome {
            VerbOutcome::Evaluated(search) => Some(search),
            VerbOutcome::Excluded(_) => None,
        }
    }

    /// Allomorphy that excluded the verb, if any
    pub fn exclusion(&self) -> Option<AllomorphyKind> {
        match self.outcome {
            VerbOutcome::Excluded(kind) => Some(kind),
            VerbOutcome::Evaluated(_) => None,
        }
    }

    /// Correct forms under the winning hypothesis
    pub fn score(&self) -> usize {
        self.search().map_or(0, |s| s.evaluation.score())
    }

    /// Whether all seven forms are predicted
    pub fn is_complete(&self) -> bool {
        self.search().is_some_and(|s| s.evaluation.is_complete())
    }

    /// Winning hypothesis
    pub fn hypothesis(&self) -> Option<&AccentHypothesis> {
        self.search().and_then(|s| s.hypothesis.as_ref())
    }

    /// Method tags of the winning hypothesis
    pub fn methods(&self) -> Option<&[Method; FORM_COUNT]> {
        self.search().map(|s| &s.evaluation.methods)
    }
}

/// All verb reports of a run plus their totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusReport {
    /// Reports in corpus order
    pub verbs: Vec<VerbReport>,
    /// Totals over `verbs`
    pub summary: Summary,
}

impl CorpusReport {
    /// Fold reports into a corpus report
    pub fn from_reports(verbs: Vec<VerbReport>) -> Self {
        let summary = verbs
            .iter()
            .map(|v| Summary::of(&v.outcome))
            .fold(Summary::identity(), |acc, s| acc.combine(&s));
        Self { verbs, summary }
    }

    /// Append another report, e.g. from a second corpus file
    pub fn merge(mut self, other: CorpusReport) -> Self {
        self.summary = self.summary.combine(&other.summary);
        self.verbs.extend(other.verbs);
        self
    }

    /// Verbs with all seven forms predicted
    pub fn complete(&self) -> impl Iterator<Item = &VerbReport> {
        self.verbs.iter().filter(|v| v.is_complete())
    }

    /// Verbs excluded because of allomorphy
    pub fn excluded(&self) -> impl Iterator<Item = &VerbReport> {
        self.verbs.iter().filter(|v| v.exclusion().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dybo_core::Evaluation;

    fn evaluated(correct: usize) -> VerbOutcome {
        let mut evaluation = Evaluation::default();
        for slot in evaluation.correct.iter_mut().take(correct) {
            *slot = true;
        }
        VerbOutcome::Evaluated(SearchOutcome {
            hypothesis: None,
            evaluation,
            scored: 1,
        })
    }

    #[test]
    fn test_summary_of_outcomes() {
        let full = Summary::of(&evaluated(7));
        assert_eq!(full.correct_predictions, 7);
        assert_eq!(full.complete_verbs, 1);
        assert_eq!(full.verbs_evaluated, 1);

        let partial = Summary::of(&evaluated(4));
        assert_eq!(partial.complete_verbs, 0);
        assert_eq!(partial.forms_predicted, 7);

        let excluded = Summary::of(&VerbOutcome::Excluded(AllomorphyKind::Root));
        assert_eq!(excluded.verbs_evaluated, 0);
        assert_eq!(excluded.forms_predicted, 0);
        assert_eq!(excluded.verbs_excluded, 1);
    }

    #[test]
    fn test_monoid_laws() {
        let a = Summary::of(&evaluated(7));
        let b = Summary::of(&evaluated(3));
        let c = Summary::of(&VerbOutcome::Excluded(AllomorphyKind::Preverb));

        assert_eq!(a.combine(&Summary::identity()), a);
        assert_eq!(Summary::identity().combine(&a), a);
        assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(Summary::identity().accuracy(), 0.0);
        let s = Summary::of(&evaluated(7)).combine(&Summary::of(&evaluated(0)));
        assert!((s.accuracy() - 0.5).abs() < f64::EPSILON);
    }
}
