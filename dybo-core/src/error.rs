//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
///
/// Every variant signals a mismatch between the corpus and the morphological
/// conventions the evaluator was built for. None of them is recoverable for
/// the verb that triggered it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A functional morpheme tag that the accent table does not know
    #[error("unknown morpheme tag '{tag}'")]
    UnknownMorphemeTag {
        /// The offending gloss tag
        tag: String,
    },

    /// The target morpheme is absent from a form's gloss
    #[error("morpheme '{tag}' not found in gloss '{gloss}'")]
    MissingMorpheme {
        /// Tag that was looked up (`R`, `PREV`, `R0`, ...)
        tag: String,
        /// Gloss string that was searched
        gloss: String,
    },

    /// Phonological and gloss strings of one form have different lengths
    #[error("form has {phon} phonological segments but {gloss} gloss tags")]
    UnalignedForm {
        /// Number of phonological segments
        phon: usize,
        /// Number of gloss tags
        gloss: usize,
    },

    /// A root or preverb tag without a numeric element index
    #[error("element tag '{tag}' has no numeric index")]
    UnindexedElement {
        /// The offending tag, e.g. `R` or `R.DYN`
        tag: String,
    },

    /// A root or preverb element refers past the end of the hypothesis
    #[error("element '{tag}' has no accent in a hypothesis of {available} elements")]
    ElementOutOfRange {
        /// Element tag, e.g. `PREV2`
        tag: String,
        /// Number of accents in the hypothesis tuple
        available: usize,
    },

    /// Too many root and preverb elements to enumerate
    #[error("search space of {elements} elements exceeds the supported maximum of {max}")]
    SearchSpaceTooLarge {
        /// Root plus preverb element count
        elements: usize,
        /// Largest supported element count
        max: usize,
    },

    /// Orthographic character outside the phoneme-class table
    #[error("unknown phoneme '{ch}' in '{form}'")]
    UnknownPhoneme {
        /// The character that could not be classified
        ch: char,
        /// The orthographic form being transcribed
        form: String,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_display() {
        let err = CoreError::UnknownMorphemeTag {
            tag: "FUT".to_string(),
        };
        assert_eq!(err.to_string(), "unknown morpheme tag 'FUT'");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = CoreError::ElementOutOfRange {
            tag: "PREV2".to_string(),
            available: 1,
        };
        assert!(err.to_string().contains("PREV2"));
        assert!(err.to_string().contains('1'));
    }
}
