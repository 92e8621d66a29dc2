//! Verb entries and their preparation for evaluation
//!
//! A verb entry holds the seven inflected forms of one dictionary verb. Before
//! any hypothesis is tried the entry is de-coalesced, its preverb and root are
//! split into elements, and the element counts are checked for allomorphy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gloss::{count_elements, has_preverb, PREVERB, ROOT};
use crate::segment::{segment_morpheme, CausativePrefix};

/// Number of inflected forms per verb
pub const FORM_COUNT: usize = 7;

/// The seven inflected forms, in corpus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    /// Masdar / infinitive
    Infinitive,
    /// Present tense, affirmative
    PresentAffirmative,
    /// Present tense, negative (negation is a suffix here)
    PresentNegative,
    /// Imperative, affirmative
    ImperativeAffirmative,
    /// Imperative, negative
    ImperativeNegative,
    /// Absolutive, affirmative
    AbsolutiveAffirmative,
    /// Absolutive, negative
    AbsolutiveNegative,
}

impl FormKind {
    /// All forms in corpus order
    pub const ALL: [FormKind; FORM_COUNT] = [
        FormKind::Infinitive,
        FormKind::PresentAffirmative,
        FormKind::PresentNegative,
        FormKind::ImperativeAffirmative,
        FormKind::ImperativeNegative,
        FormKind::AbsolutiveAffirmative,
        FormKind::AbsolutiveNegative,
    ];

    /// Position of the form within a verb entry
    pub fn index(self) -> usize {
        self as usize
    }

    /// Forms whose present-tense dynamic marker may be coalesced
    pub fn is_present(self) -> bool {
        matches!(self, FormKind::PresentAffirmative | FormKind::PresentNegative)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormKind::Infinitive => "infinitive",
            FormKind::PresentAffirmative => "present-affirmative",
            FormKind::PresentNegative => "present-negative",
            FormKind::ImperativeAffirmative => "imperative-affirmative",
            FormKind::ImperativeNegative => "imperative-negative",
            FormKind::AbsolutiveAffirmative => "absolutive-affirmative",
            FormKind::AbsolutiveNegative => "absolutive-negative",
        };
        f.write_str(name)
    }
}

/// One inflected form: aligned orthography, phonology and gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSlot {
    /// Orthographic form with morpheme boundaries
    pub orthography: String,
    /// Coarse phonological transcription, aligned with the gloss
    pub phonology: String,
    /// Hyphen-delimited morpheme tags
    pub gloss: String,
}

impl FormSlot {
    /// Create a form slot
    pub fn new(orthography: impl Into<String>, phonology: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            orthography: orthography.into(),
            phonology: phonology.into(),
            gloss: gloss.into(),
        }
    }

    /// Check that phonology and gloss have the same number of segments
    pub fn check_alignment(&self) -> Result<()> {
        crate::gloss::split_aligned(&self.phonology, &self.gloss).map(|_| ())
    }
}

/// Gloss of a root fused with the dynamic marker
const COALESCED_GLOSS: &str = "R.DYN";

/// Undo root-vowel / dynamic-marker coalescence in one form.
///
/// The fused vowel `о` is the root-final `а` followed by the `уа` marker.
fn decoalesce(form: &FormSlot) -> FormSlot {
    FormSlot {
        orthography: form.orthography.replace('О', "а-уА").replace('о', "а-уа"),
        phonology: form.phonology.replace('O', "a-CA").replace('o', "a-Ca"),
        gloss: form.gloss.replace(COALESCED_GLOSS, "R-DYN"),
    }
}

/// One dictionary verb with its seven forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbEntry {
    /// Forms in [`FormKind::ALL`] order
    pub forms: [FormSlot; FORM_COUNT],
    /// Verb-category gloss template, e.g. `C1-PREV-R`
    pub template: String,
    /// Verb is a causative
    pub causative: bool,
    /// Identifier label supplied by the corpus curator
    pub label: String,
}

impl VerbEntry {
    /// The form of the given kind
    pub fn form(&self, kind: FormKind) -> &FormSlot {
        &self.forms[kind.index()]
    }

    /// Orthographic infinitive, used to name the verb in diagnostics
    pub fn infinitive(&self) -> &str {
        &self.form(FormKind::Infinitive).orthography
    }

    /// Whether the verb category has a preverb
    pub fn has_preverb(&self) -> bool {
        has_preverb(&self.template)
    }

    /// Whether the present forms show root / dynamic-marker coalescence
    pub fn is_coalesced(&self) -> bool {
        self.form(FormKind::PresentAffirmative).gloss.contains(COALESCED_GLOSS)
    }

    /// Split preverb and root into elements and check for allomorphy
    pub fn prepare(&self, policy: CausativePrefix) -> Result<Preparation> {
        let coalesced = self.is_coalesced();
        let preverb = self.has_preverb();

        let mut forms = self.forms.clone();
        let mut preverb_counts = Vec::with_capacity(FORM_COUNT);
        let mut root_counts = Vec::with_capacity(FORM_COUNT);

        for (kind, form) in FormKind::ALL.into_iter().zip(forms.iter_mut()) {
            if coalesced && kind.is_present() {
                *form = decoalesce(form);
            }

            if preverb {
                let seg = segment_morpheme(&form.phonology, &form.gloss, PREVERB, self.causative, policy)?;
                form.phonology = seg.phonology;
                form.gloss = seg.gloss;
                preverb_counts.push(count_elements(&form.gloss, PREVERB));
            }

            let seg = segment_morpheme(&form.phonology, &form.gloss, ROOT, self.causative, policy)?;
            form.phonology = seg.phonology;
            form.gloss = seg.gloss;
            root_counts.push(count_elements(&form.gloss, ROOT));
        }

        if !all_equal(&preverb_counts) {
            return Ok(Preparation::Allomorphic(AllomorphyKind::Preverb));
        }
        if !all_equal(&root_counts) {
            return Ok(Preparation::Allomorphic(AllomorphyKind::Root));
        }

        Ok(Preparation::Ready(PreparedVerb {
            forms,
            template: self.template.clone(),
            causative: self.causative,
            root_elements: root_counts[0],
            preverb_elements: preverb_counts.first().copied().unwrap_or(0),
        }))
    }
}

fn all_equal(counts: &[usize]) -> bool {
    counts.windows(2).all(|w| w[0] == w[1])
}

/// Which morpheme varies in element count across the forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllomorphyKind {
    /// Preverb element count differs between forms
    Preverb,
    /// Root element count differs between forms
    Root,
}

impl fmt::Display for AllomorphyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllomorphyKind::Preverb => write!(f, "PREVERB ALLOMORPHY"),
            AllomorphyKind::Root => write!(f, "ROOT ALLOMORPHY"),
        }
    }
}

/// Outcome of preparing a verb for the hypothesis search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preparation {
    /// Segmented and allomorphy-free
    Ready(PreparedVerb),
    /// Excluded from scoring
    Allomorphic(AllomorphyKind),
}

/// A verb whose root and preverb have been split into elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedVerb {
    /// Segmented forms in [`FormKind::ALL`] order
    pub forms: [FormSlot; FORM_COUNT],
    /// Verb-category gloss template
    pub template: String,
    /// Verb is a causative
    pub causative: bool,
    /// Element count of the root, identical in every form
    pub root_elements: usize,
    /// Element count of the preverb, zero without one
    pub preverb_elements: usize,
}
