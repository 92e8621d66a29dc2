//! Phoneme classes of the orthography
//!
//! The phonological column of the corpus is a coarse transcription of the
//! orthographic column: consonant letters become `C`, vowels keep their
//! quality (upper case when stressed), high vowels and glides become `G`/`g`,
//! and the labialisation and palatalisation signs disappear. This table
//! reproduces that mapping so the corpus can be checked for drift.

use std::collections::HashMap;

use crate::error::{CoreError, Result};

/// Character-to-class mapping for Cyrillic orthography
#[derive(Debug, Clone)]
pub struct PhonemeClassTable {
    classes: HashMap<char, &'static str>,
}

/// Consonant letters, all mapped to `C`
const CONSONANTS: &str = "бвгҕджзӡкқҟлмнпҧрстҭфхҳцҵчҷҽшҩҿџ";

impl Default for PhonemeClassTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PhonemeClassTable {
    /// The mapping used to build the corpus
    pub fn standard() -> Self {
        let mut classes: HashMap<char, &'static str> = [
            ('А', "A"),
            ('Ы', "Y"),
            ('У', "G"),
            ('И', "G"),
            ('Е', "E"),
            ('О', "O"),
            ('а', "a"),
            ('ы', "y"),
            ('е', "e"),
            ('о', "o"),
            ('и', "g"),
            ('у', "g"),
            ('ә', ""),
            ('ь', ""),
            ('-', "-"),
        ]
        .into_iter()
        .collect();

        for ch in CONSONANTS.chars() {
            classes.insert(ch, "C");
        }

        Self { classes }
    }

    /// Class of a single character, if known
    pub fn class_of(&self, ch: char) -> Option<&'static str> {
        self.classes.get(&ch).copied()
    }

    /// Transcribe an orthographic form; unknown characters are an error
    pub fn transcribe(&self, orthography: &str) -> Result<String> {
        orthography
            .chars()
            .map(|ch| {
                self.class_of(ch).ok_or_else(|| CoreError::UnknownPhoneme {
                    ch,
                    form: orthography.to_string(),
                })
            })
            .collect()
    }
}
