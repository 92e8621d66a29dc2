//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use dybo_core::{AllomorphyKind, Method, FORM_COUNT};
use dybo_engine::{Summary, VerbReport};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects verbs and writes a single document on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    document: ReportDocument,
}

/// Verdict on one verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbStatus {
    /// All seven forms predicted
    Complete,
    /// Evaluated, fewer than seven forms predicted
    Partial,
    /// Not evaluated because of allomorphy
    Excluded,
}

/// Data structure for one verb in JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbData {
    /// 1-based corpus line
    pub line: usize,
    /// Identifier label
    pub label: String,
    /// Orthographic infinitive
    pub infinitive: String,
    /// Gloss template
    pub template: String,
    /// Verdict
    pub status: VerbStatus,
    /// Correctly predicted forms
    pub score: usize,
    /// Winning hypothesis, e.g. `R(A,U)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypothesis: Option<String>,
    /// Method tags of the winning hypothesis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<[Method; FORM_COUNT]>,
    /// Per-form correctness of the winning hypothesis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<[bool; FORM_COUNT]>,
    /// Kind of allomorphy for excluded verbs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allomorphy: Option<AllomorphyKind>,
}

impl From<&VerbReport> for VerbData {
    fn from(verb: &VerbReport) -> Self {
        let status = match (verb.exclusion(), verb.is_complete()) {
            (Some(_), _) => VerbStatus::Excluded,
            (None, true) => VerbStatus::Complete,
            (None, false) => VerbStatus::Partial,
        };

        Self {
            line: verb.line,
            label: verb.label.clone(),
            infinitive: verb.infinitive.clone(),
            template: verb.template.clone(),
            status,
            score: verb.score(),
            hypothesis: verb.hypothesis().map(|h| h.to_string()),
            methods: verb.methods().copied(),
            correct: verb.search().map(|s| s.evaluation.correct),
            allomorphy: verb.exclusion(),
        }
    }
}

/// The whole JSON document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Verbs in corpus order
    pub verbs: Vec<VerbData>,
    /// Corpus totals
    pub summary: Summary,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            document: ReportDocument::default(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn format_verb(&mut self, verb: &VerbReport) -> Result<()> {
        self.document.verbs.push(VerbData::from(verb));
        Ok(())
    }

    fn format_summary(&mut self, summary: &Summary) -> Result<()> {
        self.document.summary = *summary;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
