//! Plain text output formatter

use super::{method_list, ReportFormatter};
use anyhow::Result;
use dybo_engine::{Summary, VerbReport};
use std::io::Write;

/// Plain text formatter
///
/// Writes one line per excluded verb and per 7/7 verb, optionally one per
/// partially predicted verb, then the four summary lines.
pub struct TextFormatter<W: Write> {
    writer: W,
    show_partial: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_partial: false,
        }
    }

    /// Also report verbs below 7/7
    pub fn show_partial(mut self, show: bool) -> Self {
        self.show_partial = show;
        self
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn format_verb(&mut self, verb: &VerbReport) -> Result<()> {
        if let Some(kind) = verb.exclusion() {
            writeln!(
                self.writer,
                "{} {} {}: {kind}. VERB NOT EVALUATED.",
                verb.infinitive, verb.template, verb.label
            )?;
            return Ok(());
        }

        if verb.is_complete() {
            if let Some(methods) = verb.methods() {
                writeln!(self.writer, "{} {}", verb.label, method_list(methods))?;
            }
        } else if self.show_partial {
            let hypothesis = verb
                .hypothesis()
                .map_or_else(|| "no hypothesis".to_string(), |h| h.to_string());
            writeln!(
                self.writer,
                "{} {} {}: {}/7 with {hypothesis}",
                verb.infinitive,
                verb.template,
                verb.label,
                verb.score()
            )?;
        }

        Ok(())
    }

    fn format_summary(&mut self, summary: &Summary) -> Result<()> {
        writeln!(self.writer, "Total correct predictions: {}", summary.correct_predictions)?;
        writeln!(self.writer, "Total forms predicted: {}", summary.forms_predicted)?;
        writeln!(self.writer, "Verbs with 7/7 correct predictions: {}", summary.complete_verbs)?;
        writeln!(self.writer, "Verbs evaluated: {}", summary.verbs_evaluated)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
