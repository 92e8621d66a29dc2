//! Corpus reading

use anyhow::{Context, Result};
use dybo_engine::{CorpusInput, CorpusLayout, CorpusRecord};
use std::io;

use super::CorpusSource;

/// Reads and parses corpus sources
pub struct FileReader;

impl FileReader {
    /// Read and parse a source
    pub fn read_corpus(source: &CorpusSource, layout: CorpusLayout) -> Result<Vec<CorpusRecord>> {
        let records = Self::input(source)
            .parse(layout)
            .with_context(|| format!("Failed to load corpus: {source}"))?;

        log::info!("{source}: {} verb records", records.len());
        Ok(records)
    }

    fn input(source: &CorpusSource) -> CorpusInput {
        match source {
            CorpusSource::Stdin => CorpusInput::from_reader(io::stdin()),
            CorpusSource::File(path) => CorpusInput::from_file(path.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_blank_corpus_has_no_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corpus.tsv");
        fs::write(&path, "\n\n").unwrap();

        let source = CorpusSource::File(path);
        assert!(FileReader::read_corpus(&source, CorpusLayout::V1).unwrap().is_empty());
    }

    #[test]
    fn test_read_nonexistent_file() {
        let source = CorpusSource::File(PathBuf::from("/nonexistent/corpus.tsv"));
        let err = FileReader::read_corpus(&source, CorpusLayout::V1).unwrap_err();
        assert!(err.to_string().contains("Failed to load corpus"));
    }

    #[test]
    fn test_malformed_corpus_names_file_and_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.tsv");
        fs::write(&path, "too\tfew\tcolumns\n").unwrap();

        let err = FileReader::read_corpus(&CorpusSource::File(path), CorpusLayout::V1).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("bad.tsv"));
        assert!(message.contains("malformed corpus line 1"));
    }
}
