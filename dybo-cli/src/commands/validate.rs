//! Validate command implementation
//!
//! Parses every corpus line and re-derives each form's phonology from its
//! orthography. Malformed lines fail immediately; transcription drift is
//! reported as warnings unless `--strict` is given.

use anyhow::Result;
use clap::Args;
use dybo_core::{FormKind, PhonemeClassTable};
use dybo_engine::{CorpusLayout, CorpusRecord};

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Corpus files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Treat transcription mismatches as errors
    #[arg(long)]
    pub strict: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One form whose phonology does not match its orthography
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based corpus line
    pub line: usize,
    /// Verb label
    pub label: String,
    /// Which form
    pub form: FormKind,
    /// What went wrong
    pub detail: String,
}

/// Check the phonology of every form of every record
pub fn check_records(table: &PhonemeClassTable, records: &[CorpusRecord]) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    for record in records {
        for (form, slot) in FormKind::ALL.into_iter().zip(&record.entry.forms) {
            let detail = match table.transcribe(&slot.orthography) {
                Ok(expected) if expected == slot.phonology => continue,
                Ok(expected) => format!(
                    "'{}' transcribes to '{expected}', corpus has '{}'",
                    slot.orthography, slot.phonology
                ),
                Err(e) => e.to_string(),
            };

            mismatches.push(Mismatch {
                line: record.line,
                label: record.entry.label.clone(),
                form,
                detail,
            });
        }
    }

    mismatches
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        let table = PhonemeClassTable::standard();
        let mut verbs = 0;
        let mut mismatches = 0;

        for source in resolve_patterns(&self.input)? {
            let records = FileReader::read_corpus(&source, CorpusLayout::V1)?;
            let found = check_records(&table, &records);

            for m in &found {
                log::warn!("{source}:{} {} ({}): {}", m.line, m.label, m.form, m.detail);
            }

            println!(
                "{source}: {} verbs, {} forms, {} mismatch(es)",
                records.len(),
                records.len() * dybo_core::FORM_COUNT,
                found.len()
            );
            verbs += records.len();
            mismatches += found.len();
        }

        if mismatches > 0 && self.strict {
            return Err(CliError::ValidationFailed(mismatches).into());
        }

        println!("✓ {verbs} verb(s) parsed, {mismatches} transcription mismatch(es)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dybo_core::{FormSlot, VerbEntry};

    fn record(orthography: &str, phonology: &str) -> CorpusRecord {
        let slot = FormSlot::new(orthography, phonology, "DEF-R-INF");
        CorpusRecord {
            line: 4,
            entry: VerbEntry {
                forms: std::array::from_fn(|_| slot.clone()),
                template: "C1-R".to_string(),
                causative: false,
                label: "GO-1".to_string(),
            },
            annotation: String::new(),
        }
    }

    #[test]
    fn test_matching_record_is_clean() {
        let table = PhonemeClassTable::standard();
        assert!(check_records(&table, &[record("а-цА-ра", "a-CA-Ca")]).is_empty());
    }

    #[test]
    fn test_drift_is_reported_per_form() {
        let table = PhonemeClassTable::standard();
        let found = check_records(&table, &[record("а-цА-ра", "a-Ca-Ca")]);
        assert_eq!(found.len(), 7);
        assert_eq!(found[0].line, 4);
        assert_eq!(found[0].form, FormKind::Infinitive);
        assert!(found[0].detail.contains("a-CA-Ca"));
    }

    #[test]
    fn test_unknown_character_is_reported() {
        let table = PhonemeClassTable::standard();
        let found = check_records(&table, &[record("а-ц?-ра", "a-C-Ca")]);
        assert_eq!(found.len(), 7);
    }
}
