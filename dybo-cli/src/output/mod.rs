//! Output formatting module

use anyhow::Result;
use dybo_engine::{Summary, VerbReport};
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Diagnostics, 7/7 verbs and the summary as plain lines
    Text,
    /// One JSON document with every verb and the summary
    Json,
}

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format the report line(s) of one verb
    fn format_verb(&mut self, verb: &VerbReport) -> Result<()>;

    /// Format the corpus totals
    fn format_summary(&mut self, summary: &Summary) -> Result<()>;

    /// Finalize output (e.g. serialize the JSON document)
    fn finish(&mut self) -> Result<()>;
}

/// Build the formatter for `format` over `writer`
pub fn formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    show_partial: bool,
    pretty_json: bool,
) -> Box<dyn ReportFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer).show_partial(show_partial)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
    }
}

/// Render `methods` the way report lines show them: `[default, exception, ...]`
pub fn method_list(methods: &[dybo_core::Method]) -> String {
    let tags: Vec<String> = methods.iter().map(|m| m.to_string()).collect();
    format!("[{}]", tags.join(", "))
}
