//! Gloss string helpers
//!
//! A gloss is a hyphen-delimited sequence of morpheme tags aligned one-to-one
//! with the segments of a phonological string, e.g. `C1-PREV0-R0-R1-ABS`.

use crate::error::{CoreError, Result};

/// Gloss tag of the verb root before element segmentation
pub const ROOT: &str = "R";

/// Gloss tag of the preverb before element segmentation
pub const PREVERB: &str = "PREV";

/// Symbols that mark a stressed vowel in the phonological transcription
pub const STRESS_MARKERS: [char; 5] = ['A', 'Y', 'V', 'G', 'E'];

/// Role of one gloss tag in accent assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRole<'a> {
    /// Root element; accent comes from the hypothesis
    Root(&'a str),
    /// Preverb element; accent comes from the hypothesis
    Preverb(&'a str),
    /// Functional morpheme; accent comes from the table
    Functional,
}

impl<'a> TagRole<'a> {
    /// Classify a tag by prefix. Root is checked before preverb.
    pub fn of(tag: &'a str) -> Self {
        if let Some(suffix) = tag.strip_prefix(ROOT) {
            TagRole::Root(suffix)
        } else if let Some(suffix) = tag.strip_prefix(PREVERB) {
            TagRole::Preverb(suffix)
        } else {
            TagRole::Functional
        }
    }
}

/// Count the gloss segments that start with `prefix`.
///
/// The match is a plain prefix test, so `PREV` also counts `PREV2`.
pub fn count_elements(gloss: &str, prefix: &str) -> usize {
    gloss.split('-').filter(|tag| tag.starts_with(prefix)).count()
}

/// Parse the element index carried after a tag prefix (`R1` -> 1).
pub fn element_index(tag: &str, suffix: &str) -> Result<usize> {
    suffix.parse().map_err(|_| CoreError::UnindexedElement {
        tag: tag.to_string(),
    })
}

/// Whether a phonological segment carries a stress marker
pub fn carries_stress(segment: &str) -> bool {
    segment.contains(STRESS_MARKERS)
}

/// Whether a verb-category template includes a preverb
pub fn has_preverb(template: &str) -> bool {
    template.contains(PREVERB)
}

/// Split an aligned phonology/gloss pair into segment lists.
pub fn split_aligned<'a>(phonology: &'a str, gloss: &'a str) -> Result<(Vec<&'a str>, Vec<&'a str>)> {
    let phon: Vec<&str> = phonology.split('-').collect();
    let tags: Vec<&str> = gloss.split('-').collect();

    if phon.len() != tags.len() {
        return Err(CoreError::UnalignedForm {
            phon: phon.len(),
            gloss: tags.len(),
        });
    }

    Ok((phon, tags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_root_elements() {
        assert_eq!(count_elements("DEF-R0-R1-R2-INF", "R"), 3);
        assert_eq!(count_elements("C1-R0-ABS", "R"), 1);
        assert_eq!(count_elements("C1-ABS", "R"), 0);
    }

    #[test]
    fn test_count_is_prefix_based() {
        assert_eq!(count_elements("C1-PREV0-PREV2-R0", "PREV"), 2);
    }

    #[test]
    fn test_tag_roles() {
        assert_eq!(TagRole::of("R0"), TagRole::Root("0"));
        assert_eq!(TagRole::of("PREV12"), TagRole::Preverb("12"));
        assert_eq!(TagRole::of("DYN.FIN"), TagRole::Functional);
        assert_eq!(TagRole::of("NEG.ABS"), TagRole::Functional);
    }

    #[test]
    fn test_element_index() {
        assert_eq!(element_index("R3", "3").unwrap(), 3);
        assert!(element_index("R", "").is_err());
    }

    #[test]
    fn test_stress_markers() {
        assert!(carries_stress("CV"));
        assert!(carries_stress("A"));
        assert!(carries_stress("CG"));
        assert!(!carries_stress("Cv"));
        assert!(!carries_stress("C"));
        assert!(!carries_stress("CO"));
    }

    #[test]
    fn test_split_aligned_rejects_mismatch() {
        assert!(split_aligned("A-Ca", "DEF-R-INF").is_err());
        let (phon, tags) = split_aligned("A-CvCv-Ca", "DEF-R-INF").unwrap();
        assert_eq!(phon, vec!["A", "CvCv", "Ca"]);
        assert_eq!(tags, vec!["DEF", "R", "INF"]);
    }
}
