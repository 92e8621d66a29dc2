//! Element segmentation of roots and preverbs
//!
//! An element is a `CV(V)` sequence, a consonant not followed by a vowel, or
//! a vowel not preceded by a consonant. Functional morphemes are already a
//! single element; roots and preverbs are split here so that each element can
//! carry its own accent.
//!
//! The transcription is coarse: `C` stands for any consonant, `A`/`a` and
//! `Y`/`y` for the stressed and unstressed low and central vowels. Vowel
//! quality does not matter for elementhood, so those vowels are normalised to
//! `V`/`v` before boundaries are inserted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Treatment of the causative prefix inside the root span
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CausativePrefix {
    /// The prefix is segmented like any other part of the root
    #[default]
    Unsegmented,
    /// The prefix is carved out as the leading root element
    LeadingElement,
}

impl CausativePrefix {
    /// All policies, for listing
    pub const ALL: [CausativePrefix; 2] = [CausativePrefix::Unsegmented, CausativePrefix::LeadingElement];

    /// Stable configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            CausativePrefix::Unsegmented => "unsegmented",
            CausativePrefix::LeadingElement => "leading-element",
        }
    }
}

impl fmt::Display for CausativePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stressed causative prefix shape, which spans two symbols
const STRESSED_CAUSATIVE: &str = "CY";

/// One form after a morpheme has been split into elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedForm {
    /// Phonology with the morpheme span replaced by its elements
    pub phonology: String,
    /// Gloss with the morpheme tag replaced by `tag0-tag1-...`
    pub gloss: String,
    /// Number of elements the morpheme was split into
    pub elements: usize,
}

/// Insert element boundaries into one morpheme span.
///
/// Already-segmented spans come back unchanged.
pub fn split_elements(span: &str) -> String {
    let mut s: String = span
        .chars()
        .map(|c| match c {
            'A' | 'Y' => 'V',
            'a' | 'y' => 'v',
            other => other,
        })
        .collect();

    s = s.replace('V', "V-").replace('v', "v-");

    while s.contains("CC") {
        s = s.replace("CC", "C-C");
    }

    while s.contains("--") {
        s = s.replace("--", "-");
    }

    // Long vowels form a single element
    s = s.replace("v-v", "vv");

    if s.ends_with("v-") || s.ends_with("V-") {
        s.pop();
    }

    s
}

/// Carve the causative prefix off the front of a root span
fn split_causative_prefix(span: &str) -> String {
    let cut = if span.starts_with(STRESSED_CAUSATIVE) {
        STRESSED_CAUSATIVE.len()
    } else {
        match span.char_indices().nth(1) {
            Some((idx, _)) => idx,
            None => return span.to_string(),
        }
    };

    if cut >= span.len() {
        return span.to_string();
    }

    format!("{}-{}", &span[..cut], &span[cut..])
}

fn is_element_tag(candidate: &str, tag: &str) -> bool {
    candidate
        .strip_prefix(tag)
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Split the morpheme glossed `tag` into elements.
///
/// The first gloss position equal to `tag` selects the span. A gloss that
/// has no bare `tag` but already carries its numbered elements is returned
/// as is.
pub fn segment_morpheme(
    phonology: &str,
    gloss: &str,
    tag: &str,
    causative: bool,
    policy: CausativePrefix,
) -> Result<SegmentedForm> {
    let (mut phon, mut tags) = crate::gloss::split_aligned(phonology, gloss)?;

    let Some(position) = tags.iter().position(|t| *t == tag) else {
        let elements = tags.iter().filter(|t| is_element_tag(t, tag)).count();
        if elements == 0 {
            return Err(CoreError::MissingMorpheme {
                tag: tag.to_string(),
                gloss: gloss.to_string(),
            });
        }
        return Ok(SegmentedForm {
            phonology: phonology.to_string(),
            gloss: gloss.to_string(),
            elements,
        });
    };

    let span = if causative && tag == crate::gloss::ROOT && policy == CausativePrefix::LeadingElement {
        split_causative_prefix(phon[position])
    } else {
        phon[position].to_string()
    };

    let segmented = split_elements(&span);
    let elements = segmented.matches('-').count() + 1;
    let element_tags = (0..elements)
        .map(|i| format!("{tag}{i}"))
        .collect::<Vec<_>>()
        .join("-");

    phon[position] = &segmented;
    tags[position] = &element_tags;

    Ok(SegmentedForm {
        phonology: phon.join("-"),
        gloss: tags.join("-"),
        elements,
    })
}
