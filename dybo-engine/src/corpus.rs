//! Corpus file contract
//!
//! One verb per line, tab-separated. Layout `v1` has exactly 25 columns:
//!
//! | columns | content |
//! |---------|---------|
//! | 0–20    | seven (orthography, phonology, gloss) triples |
//! | 21      | gloss template |
//! | 22      | curator annotation, carried but never interpreted |
//! | 23      | identifier label |
//! | 24      | causative marker, `Y` or `N` |
//!
//! Blank lines are skipped. Anything else that does not fit the layout is a
//! fatal [`EngineError::MalformedLine`].

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use dybo_core::{FormSlot, VerbEntry, FORM_COUNT};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Column separator
pub const SEPARATOR: char = '\t';

/// Versioned column layout of a corpus file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusLayout {
    /// The layout of the hand-corrected corpus
    #[default]
    V1,
}

impl CorpusLayout {
    /// Number of columns per line
    pub fn columns(&self) -> usize {
        match self {
            CorpusLayout::V1 => 25,
        }
    }

    /// Column of the gloss template
    pub fn template_column(&self) -> usize {
        match self {
            CorpusLayout::V1 => 3 * FORM_COUNT,
        }
    }

    /// Column of the curator annotation
    pub fn annotation_column(&self) -> usize {
        self.template_column() + 1
    }

    /// Column of the identifier label
    pub fn label_column(&self) -> usize {
        self.template_column() + 2
    }

    /// Column of the causative marker
    pub fn causative_column(&self) -> usize {
        self.template_column() + 3
    }
}

impl fmt::Display for CorpusLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusLayout::V1 => f.write_str("v1"),
        }
    }
}

/// One parsed corpus line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRecord {
    /// 1-based line number in the source
    pub line: usize,
    /// The verb described by the line
    pub entry: VerbEntry,
    /// Free-form curator annotation
    pub annotation: String,
}

/// Parse one non-blank corpus line
pub fn parse_line(line: usize, text: &str, layout: CorpusLayout) -> Result<CorpusRecord> {
    let malformed = |reason: String| EngineError::MalformedLine { line, reason };

    let columns: Vec<&str> = text.trim_end_matches(['\r', '\n']).split(SEPARATOR).collect();
    if columns.len() != layout.columns() {
        return Err(malformed(format!(
            "expected {} columns for layout {layout}, found {}",
            layout.columns(),
            columns.len()
        )));
    }

    let forms: [FormSlot; FORM_COUNT] = std::array::from_fn(|i| {
        FormSlot::new(columns[3 * i], columns[3 * i + 1], columns[3 * i + 2])
    });

    for (i, form) in forms.iter().enumerate() {
        form.check_alignment()
            .map_err(|e| malformed(format!("form {}: {e}", i + 1)))?;
    }

    let causative = match columns[layout.causative_column()] {
        "Y" => true,
        "N" => false,
        other => {
            return Err(malformed(format!("causative marker must be Y or N, found '{other}'")));
        }
    };

    Ok(CorpusRecord {
        line,
        entry: VerbEntry {
            forms,
            template: columns[layout.template_column()].to_string(),
            causative,
            label: columns[layout.label_column()].to_string(),
        },
        annotation: columns[layout.annotation_column()].to_string(),
    })
}

/// Parse a whole corpus, skipping blank lines
pub fn parse_corpus(text: &str, layout: CorpusLayout) -> Result<Vec<CorpusRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(i + 1, line, layout))
        .collect()
}

/// Source of corpus text
pub enum CorpusInput {
    /// Path to a corpus file
    File(PathBuf),
    /// Reader stream (for stdin and the like)
    Reader(Box<dyn Read + Send>),
}

impl fmt::Debug for CorpusInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusInput::File(path) => f.debug_tuple("File").field(path).finish(),
            CorpusInput::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl CorpusInput {
    /// Input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        CorpusInput::File(path.into())
    }

    /// Input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        CorpusInput::Reader(Box::new(reader))
    }

    fn to_text(self) -> Result<String> {
        match self {
            CorpusInput::File(path) => fs::read_to_string(&path)
                .map_err(|e| EngineError::IoError(format!("Failed to read file {path:?}: {e}"))),
            CorpusInput::Reader(mut reader) => {
                let mut text = String::new();
                reader.read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }

    /// Read and parse the input
    pub fn parse(self, layout: CorpusLayout) -> Result<Vec<CorpusRecord>> {
        let text = self.to_text()?;
        parse_corpus(&text, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(label: &str, causative: &str) -> String {
        let mut columns = Vec::new();
        for _ in 0..FORM_COUNT {
            columns.extend(["а-цА-ра", "a-CA-Ca", "DEF-R-INF"]);
        }
        columns.extend(["C1-R", "", label, causative]);
        columns.join("\t")
    }

    #[test]
    fn test_parse_line() {
        let record = parse_line(3, &line("GO-1", "N"), CorpusLayout::V1).unwrap();
        assert_eq!(record.line, 3);
        assert_eq!(record.entry.label, "GO-1");
        assert_eq!(record.entry.template, "C1-R");
        assert!(!record.entry.causative);
        assert_eq!(record.entry.infinitive(), "а-цА-ра");
    }

    #[test]
    fn test_causative_marker() {
        let record = parse_line(1, &line("MAKE-GO", "Y"), CorpusLayout::V1).unwrap();
        assert!(record.entry.causative);

        let err = parse_line(1, &line("MAKE-GO", "yes"), CorpusLayout::V1).unwrap_err();
        assert!(matches!(err, EngineError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_wrong_column_count() {
        let err = parse_line(7, "a\tb\tc", CorpusLayout::V1).unwrap_err();
        match err {
            EngineError::MalformedLine { line, reason } => {
                assert_eq!(line, 7);
                assert!(reason.contains("expected 25 columns"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unaligned_form() {
        let text = line("GO-1", "N").replacen("a-CA-Ca", "a-CACa", 1);
        let err = parse_line(2, &text, CorpusLayout::V1).unwrap_err();
        assert!(matches!(err, EngineError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_blank_lines_skipped_and_numbered() {
        let text = format!("{}\n\n{}\n", line("A", "N"), line("B", "Y"));
        let records = parse_corpus(&text, CorpusLayout::V1).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[1].line, 3);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = format!("{}\r\n", line("A", "N"));
        let records = parse_corpus(&text, CorpusLayout::V1).unwrap();
        assert!(!records[0].entry.causative);
    }

    #[test]
    fn test_reader_input() {
        let text = line("A", "N");
        let input = CorpusInput::from_reader(std::io::Cursor::new(text.into_bytes()));
        assert_eq!(input.parse(CorpusLayout::V1).unwrap().len(), 1);
    }
}
