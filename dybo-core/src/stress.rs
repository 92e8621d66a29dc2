//! Stress placement
//!
//! Dybo's Rule puts primary stress on the leftmost accented element that is
//! not immediately followed by another accented element. A form without any
//! accent is stressed on the final element of its root. Two categorical
//! pre-stress patterns are checked before the rule runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::accent::{Accent, Method};
use crate::error::{CoreError, Result};
use crate::gloss::{count_elements, has_preverb, ROOT};

/// Tag of the first root element after segmentation
const FIRST_ROOT_ELEMENT: &str = "R0";

/// Which rule turns accents into a stress position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StressRule {
    /// Dybo's Rule with the pre-stress exceptions
    #[default]
    Dybo,
    /// Always the first element of the form
    WordInitial,
    /// Always the last element of the form
    WordFinal,
    /// Always the first root element
    RootInitial,
    /// Always the last root element
    RootFinal,
}

impl StressRule {
    /// All rules, for listing
    pub const ALL: [StressRule; 5] = [
        StressRule::Dybo,
        StressRule::WordInitial,
        StressRule::WordFinal,
        StressRule::RootInitial,
        StressRule::RootFinal,
    ];

    /// Stable configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            StressRule::Dybo => "dybo",
            StressRule::WordInitial => "word-initial",
            StressRule::WordFinal => "word-final",
            StressRule::RootInitial => "root-initial",
            StressRule::RootFinal => "root-final",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            StressRule::Dybo => "leftmost accent not followed by an accent, root-final if unaccented",
            StressRule::WordInitial => "baseline: first element of the form",
            StressRule::WordFinal => "baseline: last element of the form",
            StressRule::RootInitial => "baseline: first element of the root",
            StressRule::RootFinal => "baseline: last element of the root",
        }
    }
}

impl fmt::Display for StressRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index of the rightmost element tagged as part of the root
pub fn root_final(tags: &[&str]) -> Option<usize> {
    tags.iter().rposition(|t| t.starts_with(ROOT))
}

/// Dybo's Rule on an accent sequence with aligned gloss tags.
///
/// Returns `None` only when nothing can be stressed: an empty form, or an
/// unaccented form without a root.
pub fn dybo_rule(accents: &[Accent], tags: &[&str]) -> Option<usize> {
    if !accents.iter().any(|a| a.is_accented()) {
        return root_final(tags);
    }

    // An accent chain defers stress to its rightmost member
    let last = accents.len() - 1;
    (0..accents.len()).find(|&i| i == last || (accents[i].is_accented() && !accents[i + 1].is_accented()))
}

/// Predicted stress position for one form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    /// Element predicted to carry stress, if any exists
    pub index: Option<usize>,
    /// Whether a pre-stress exception decided the position
    pub method: Method,
}

/// Verb-level facts the pre-stress exceptions depend on
#[derive(Debug, Clone, Copy)]
pub struct VerbShape<'a> {
    /// Verb-category gloss template
    pub template: &'a str,
    /// Verb is a causative
    pub causative: bool,
}

/// Stress predictor for a configured rule
#[derive(Debug, Clone, Copy, Default)]
pub struct StressPredictor {
    rule: StressRule,
}

impl StressPredictor {
    /// Create a predictor for the given rule
    pub fn new(rule: StressRule) -> Self {
        Self { rule }
    }

    /// Predict the stressed element of one segmented form.
    ///
    /// `accents` and `tags` are aligned element by element. The pre-stress
    /// exceptions are evaluated in every mode so that method tags do not
    /// depend on the rule; baseline rules then override the position.
    pub fn predict(&self, accents: &[Accent], tags: &[&str], verb: &VerbShape<'_>) -> Result<Prediction> {
        let r0 = tags
            .iter()
            .position(|t| *t == FIRST_ROOT_ELEMENT)
            .ok_or_else(|| CoreError::MissingMorpheme {
                tag: FIRST_ROOT_ELEMENT.to_string(),
                gloss: tags.join("-"),
            })?;

        let prediction = match pre_stress(accents, tags, r0, verb) {
            Some(index) => Prediction {
                index,
                method: Method::Exception,
            },
            None => Prediction {
                index: dybo_rule(accents, tags),
                method: Method::Default,
            },
        };

        let index = match self.rule {
            StressRule::Dybo => prediction.index,
            StressRule::WordInitial => (!tags.is_empty()).then_some(0),
            StressRule::WordFinal => tags.len().checked_sub(1),
            StressRule::RootInitial => Some(r0),
            StressRule::RootFinal => root_final(tags),
        };

        Ok(Prediction {
            index,
            method: prediction.method,
        })
    }
}

/// Pre-stress on the element before the root.
///
/// Returns `Some(target)` when an exception applies; the target itself is
/// `None` if the root is form-initial and there is nothing before it.
fn pre_stress(accents: &[Accent], tags: &[&str], r0: usize, verb: &VerbShape<'_>) -> Option<Option<usize>> {
    let plain_template =
        !has_preverb(verb.template) && !tags.iter().any(|t| *t == "C2" || *t == "C3");
    if !plain_template || accents[r0].is_accented() {
        return None;
    }

    let single_element_root = count_elements(&tags.join("-"), ROOT) == 1;
    if single_element_root || verb.causative {
        Some(r0.checked_sub(1))
    } else {
        None
    }
}
