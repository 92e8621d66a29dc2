//! Corpus pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::fmt;
use std::path::PathBuf;

use crate::error::CliError;

/// Where a corpus is read from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CorpusSource {
    /// Standard input, written as `-`
    Stdin,
    /// A corpus file
    File(PathBuf),
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusSource::Stdin => f.write_str("<stdin>"),
            CorpusSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve `-i` arguments to corpus sources.
///
/// Files matched by one pattern come back sorted; patterns keep their
/// command-line order and duplicates are dropped.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<CorpusSource>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            if !sources.contains(&CorpusSource::Stdin) {
                sources.push(CorpusSource::Stdin);
            }
            continue;
        }

        let paths = glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))
            .with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                matched.push(path);
            }
        }

        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        matched.sort();
        for path in matched {
            let source = CorpusSource::File(path);
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_glob_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        for name in ["b.tsv", "a.tsv", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let pattern = format!("{}/*.tsv", dir.path().display());
        let sources = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(
            sources,
            vec![
                CorpusSource::File(dir.path().join("a.tsv")),
                CorpusSource::File(dir.path().join("b.tsv")),
            ]
        );
    }

    #[test]
    fn test_stdin_and_duplicates() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("corpus.tsv");
        fs::write(&file, "").unwrap();
        let path = file.display().to_string();

        let sources = resolve_patterns(&["-".to_string(), path.clone(), path, "-".to_string()]).unwrap();
        assert_eq!(sources, vec![CorpusSource::Stdin, CorpusSource::File(file)]);
    }

    #[test]
    fn test_no_match_is_error() {
        let err = resolve_patterns(&["/nonexistent/dir/*.tsv".to_string()]).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[bad".to_string()]).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid file pattern"));
    }
}
