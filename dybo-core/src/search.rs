//! Exhaustive search over underlying-accent hypotheses
//!
//! For one verb, every admissible hypothesis is scored by the number of forms
//! whose predicted stressed element actually carries a stress marker. The
//! first hypothesis with the highest score wins, and the search stops as soon
//! as a hypothesis accounts for all seven forms.

use serde::{Deserialize, Serialize};

use crate::accent::{Accent, AccentTable, AssignmentContext, Method};
use crate::config::EvaluationConfig;
use crate::error::{CoreError, Result};
use crate::gloss::{carries_stress, element_index, split_aligned, TagRole};
use crate::hypothesis::{AccentHypotheses, AccentHypothesis, AccentTuple};
use crate::stress::{StressPredictor, VerbShape};
use crate::verb::{AllomorphyKind, FormKind, Preparation, PreparedVerb, VerbEntry, FORM_COUNT};

/// Per-form result of one hypothesis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Whether the predicted element carries stress, per form
    pub correct: [bool; FORM_COUNT],
    /// How each prediction was reached
    pub methods: [Method; FORM_COUNT],
}

impl Evaluation {
    /// Number of correctly predicted forms
    pub fn score(&self) -> usize {
        self.correct.iter().filter(|c| **c).count()
    }

    /// Whether all seven forms are predicted
    pub fn is_complete(&self) -> bool {
        self.score() == FORM_COUNT
    }
}

/// Best hypothesis found for one verb
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Winning hypothesis; absent when no hypothesis predicts any form
    pub hypothesis: Option<AccentHypothesis>,
    /// Evaluation of the winning hypothesis
    pub evaluation: Evaluation,
    /// Number of hypotheses scored before the search ended
    pub scored: usize,
}

/// Result of evaluating one verb entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerbOutcome {
    /// The verb was searched
    Evaluated(SearchOutcome),
    /// The verb was excluded because of allomorphy
    Excluded(AllomorphyKind),
}

/// One segmented form split into aligned element lists
struct SplitForm<'a> {
    kind: FormKind,
    phon: Vec<&'a str>,
    tags: Vec<&'a str>,
}

/// Scores hypotheses against the observed stress of a verb
#[derive(Debug, Clone, Default)]
pub struct HypothesisSearch {
    table: AccentTable,
    predictor: StressPredictor,
    config: EvaluationConfig,
}

impl HypothesisSearch {
    /// Create a search with the standard accent table
    pub fn new(config: EvaluationConfig) -> Self {
        Self::with_table(AccentTable::standard(), config)
    }

    /// Create a search with a custom accent table
    pub fn with_table(table: AccentTable, config: EvaluationConfig) -> Self {
        Self {
            table,
            predictor: StressPredictor::new(config.stress_rule),
            config,
        }
    }

    /// Active evaluation settings
    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Prepare and search one verb entry
    pub fn evaluate_entry(&self, entry: &VerbEntry) -> Result<VerbOutcome> {
        match entry.prepare(self.config.causative_prefix)? {
            Preparation::Ready(verb) => self.search(&verb).map(VerbOutcome::Evaluated),
            Preparation::Allomorphic(kind) => Ok(VerbOutcome::Excluded(kind)),
        }
    }

    /// Find the best hypothesis for an allomorphy-free verb
    pub fn search(&self, verb: &PreparedVerb) -> Result<SearchOutcome> {
        let forms = split_forms(verb)?;
        let hypotheses = AccentHypotheses::new(verb.root_elements, verb.preverb_elements, verb.causative)?;

        let mut best: Option<(AccentHypothesis, Evaluation)> = None;
        let mut best_score = 0;
        let mut scored = 0;

        for hypothesis in hypotheses {
            let evaluation = self.evaluate_split(&forms, verb, &hypothesis)?;
            scored += 1;

            // Strictly greater: the first hypothesis reaching a score keeps it
            if evaluation.score() > best_score {
                best_score = evaluation.score();
                best = Some((hypothesis, evaluation));
            }

            if best_score == FORM_COUNT {
                break;
            }
        }

        let (hypothesis, evaluation) = match best {
            Some((hypothesis, evaluation)) => (Some(hypothesis), evaluation),
            None => (None, Evaluation::default()),
        };

        Ok(SearchOutcome {
            hypothesis,
            evaluation,
            scored,
        })
    }

    /// Score a single hypothesis on all seven forms
    pub fn evaluate(&self, verb: &PreparedVerb, hypothesis: &AccentHypothesis) -> Result<Evaluation> {
        let forms = split_forms(verb)?;
        self.evaluate_split(&forms, verb, hypothesis)
    }

    fn evaluate_split(
        &self,
        forms: &[SplitForm<'_>],
        verb: &PreparedVerb,
        hypothesis: &AccentHypothesis,
    ) -> Result<Evaluation> {
        let shape = VerbShape {
            template: &verb.template,
            causative: verb.causative,
        };
        let mut evaluation = Evaluation::default();

        for form in forms {
            let ctx = AssignmentContext {
                causative: verb.causative,
                form: form.kind,
                template: &verb.template,
            };

            let mut method = Method::Default;
            let mut accents = Vec::with_capacity(form.tags.len());
            for (tag, phon) in form.tags.iter().zip(&form.phon) {
                let accent = match TagRole::of(tag) {
                    TagRole::Root(suffix) => hypothesis_accent(&hypothesis.root, tag, suffix)?,
                    TagRole::Preverb(suffix) => hypothesis_accent(&hypothesis.preverb, tag, suffix)?,
                    TagRole::Functional => {
                        let assignment = self.table.assign(&ctx, tag, phon)?;
                        method = method.join(assignment.method);
                        assignment.accent
                    }
                };
                accents.push(accent);
            }

            let prediction = self.predictor.predict(&accents, &form.tags, &shape)?;
            let slot = form.kind.index();
            evaluation.methods[slot] = method.join(prediction.method);
            evaluation.correct[slot] = prediction.index.is_some_and(|i| carries_stress(form.phon[i]));
        }

        Ok(evaluation)
    }
}

fn split_forms(verb: &PreparedVerb) -> Result<Vec<SplitForm<'_>>> {
    FormKind::ALL
        .into_iter()
        .zip(verb.forms.iter())
        .map(|(kind, form)| {
            let (phon, tags) = split_aligned(&form.phonology, &form.gloss)?;
            Ok(SplitForm { kind, phon, tags })
        })
        .collect()
}

fn hypothesis_accent(tuple: &AccentTuple, tag: &str, suffix: &str) -> Result<Accent> {
    let index = element_index(tag, suffix)?;
    tuple.get(index).copied().ok_or_else(|| CoreError::ElementOutOfRange {
        tag: tag.to_string(),
        available: tuple.len(),
    })
}
