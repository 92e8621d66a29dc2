//! Underlying accents of functional morphemes
//!
//! Functional morphemes are always a single element and receive their accent
//! from a fixed table, after a short list of lexical and morphological
//! exceptions has been checked. Root and preverb elements never go through
//! this module; their accents come from the hypothesis under test.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::verb::FormKind;

/// Lexical accent of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Accent {
    /// No underlying accent
    Unaccented,
    /// Underlying accent
    Accented,
}

impl Accent {
    /// Both values in enumeration order
    pub const ALL: [Accent; 2] = [Accent::Unaccented, Accent::Accented];

    /// Whether this is [`Accent::Accented`]
    #[inline]
    pub fn is_accented(self) -> bool {
        matches!(self, Accent::Accented)
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accent::Unaccented => write!(f, "U"),
            Accent::Accented => write!(f, "A"),
        }
    }
}

/// How the prediction for one form was reached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Table accents and Dybo's Rule only
    #[default]
    Default,
    /// A documented exception changed an accent or the stress placement
    Exception,
}

impl Method {
    /// Combine two method tags; an exception anywhere taints the form
    pub fn join(self, other: Method) -> Method {
        match (self, other) {
            (Method::Default, Method::Default) => Method::Default,
            _ => Method::Exception,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Default => write!(f, "default"),
            Method::Exception => write!(f, "exception"),
        }
    }
}

/// Accent chosen for one functional element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    /// The assigned accent
    pub accent: Accent,
    /// Whether an exception produced it
    pub method: Method,
}

impl Assignment {
    fn table(accent: Accent) -> Self {
        Self {
            accent,
            method: Method::Default,
        }
    }

    fn exception(accent: Accent) -> Self {
        Self {
            accent,
            method: Method::Exception,
        }
    }
}

/// Per-verb facts the exceptions depend on
#[derive(Debug, Clone, Copy)]
pub struct AssignmentContext<'a> {
    /// Verb is a causative
    pub causative: bool,
    /// Which of the seven forms is being evaluated
    pub form: FormKind,
    /// Verb-category gloss template, e.g. `C1-C2-R`
    pub template: &'a str,
}

/// Phonological shapes of `C3` that are lexically accented
const ACCENTED_C3_SHAPES: [&str; 4] = ["CA", "Ca", "A", "a"];

/// Template whose negative prefix is accented
const ACCENTED_NEGATIVE_TEMPLATE: &str = "C1-C2-R";

/// Default accents of the functional morphemes
#[derive(Debug, Clone)]
pub struct AccentTable {
    entries: HashMap<&'static str, Accent>,
}

impl Default for AccentTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl AccentTable {
    /// The accent system evaluated in the study
    pub fn standard() -> Self {
        use Accent::{Accented, Unaccented};

        let entries = [
            ("DEF", Accented),
            ("INF", Accented),
            ("C1", Unaccented),
            ("C2", Accented),
            ("C3", Unaccented),
            ("NEG", Unaccented),
            ("DYN", Accented),
            ("DYN.FIN", Unaccented),
            ("DYN.IMP", Unaccented),
            ("ABS", Accented),
            ("NEG.ABS", Unaccented),
        ]
        .into_iter()
        .collect();

        Self { entries }
    }

    /// Plain table lookup without exceptions
    pub fn lookup(&self, tag: &str) -> Result<Accent> {
        self.entries
            .get(tag)
            .copied()
            .ok_or_else(|| CoreError::UnknownMorphemeTag {
                tag: tag.to_string(),
            })
    }

    /// Number of tags in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assign the accent of one functional element.
    ///
    /// Exceptions are tried in priority order before falling back to the
    /// table. The `NEG` exceptions never apply in the present negative, where
    /// `NEG` is a suffix rather than the negative prefix.
    pub fn assign(&self, ctx: &AssignmentContext<'_>, tag: &str, phon: &str) -> Result<Assignment> {
        let negative_prefix = tag == "NEG" && ctx.form != FormKind::PresentNegative;

        // Overgenerates for other low-vowel C3 shapes; inert on the corpus
        if tag == "C3" && ACCENTED_C3_SHAPES.contains(&phon) {
            return Ok(Assignment::table(Accent::Accented));
        }

        if tag == "C3" && ctx.causative {
            return Ok(Assignment::exception(Accent::Accented));
        }

        if negative_prefix && ctx.causative {
            return Ok(Assignment::exception(Accent::Accented));
        }

        if negative_prefix && ctx.template == ACCENTED_NEGATIVE_TEMPLATE {
            return Ok(Assignment::exception(Accent::Accented));
        }

        self.lookup(tag).map(Assignment::table)
    }
}
