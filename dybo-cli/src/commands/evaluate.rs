//! Evaluate command implementation

use anyhow::{Context, Result};
use clap::Args;
use dybo_core::{CausativePrefix, EvaluationConfig, StressRule};
use dybo_engine::{CorpusEvaluator, CorpusLayout, CorpusReport, EngineConfig, ExecutionMode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{formatter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the evaluate command
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Corpus files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "DYBO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Stress rule to evaluate
    #[arg(long, value_enum)]
    pub stress_rule: Option<RuleArg>,

    /// Treatment of the causative prefix in root segmentation
    #[arg(long, value_enum)]
    pub causative_prefix: Option<PolicyArg>,

    /// Evaluate verbs in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel evaluation (0 = all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Also report verbs below 7/7
    #[arg(long)]
    pub show_partial: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Stress rules selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RuleArg {
    /// Dybo's Rule
    Dybo,
    /// Stress the first element
    WordInitial,
    /// Stress the last element
    WordFinal,
    /// Stress the first root element
    RootInitial,
    /// Stress the last root element
    RootFinal,
}

impl From<RuleArg> for StressRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Dybo => StressRule::Dybo,
            RuleArg::WordInitial => StressRule::WordInitial,
            RuleArg::WordFinal => StressRule::WordFinal,
            RuleArg::RootInitial => StressRule::RootInitial,
            RuleArg::RootFinal => StressRule::RootFinal,
        }
    }
}

/// Causative-prefix policies selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    /// Segment the prefix with the rest of the root
    Unsegmented,
    /// Carve the prefix out as the first root element
    LeadingElement,
}

impl From<PolicyArg> for CausativePrefix {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Unsegmented => CausativePrefix::Unsegmented,
            PolicyArg::LeadingElement => CausativePrefix::LeadingElement,
        }
    }
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    /// Evaluation knobs
    pub evaluation: EvaluationConfig,
    /// Output format
    pub format: OutputFormat,
    /// Report verbs below 7/7
    pub show_partial: bool,
    /// Pretty print JSON
    pub pretty_json: bool,
    /// Use the parallel executor
    pub parallel: bool,
    /// Worker threads, 0 = auto
    pub threads: usize,
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting corpus evaluation");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.resolve(&config)?;
        log::info!(
            "stress rule: {}, causative prefix: {}",
            settings.evaluation.stress_rule,
            settings.evaluation.causative_prefix
        );

        let sources = resolve_patterns(&self.input)?;
        let engine_config = self.engine_config(&settings);
        let evaluator = CorpusEvaluator::new(engine_config);

        // No bar while a JSON document goes to stdout
        let to_stdout = self.output.is_none();
        let mut progress = ProgressReporter::new(self.quiet || (to_stdout && settings.format == OutputFormat::Json));

        let mut corpora = Vec::with_capacity(sources.len());
        for source in &sources {
            corpora.push((source, FileReader::read_corpus(source, CorpusLayout::V1)?));
        }
        let total: usize = corpora.iter().map(|(_, records)| records.len()).sum();
        progress.init_verbs(total as u64);

        let mut report = CorpusReport::default();
        for (source, records) in &corpora {
            let partial = evaluator
                .evaluate_with_progress(records, &|verb| progress.verb_completed(&verb.label))
                .with_context(|| format!("Evaluation failed for {source}"))?;
            report = report.merge(partial);
        }
        progress.finish();

        self.write_report(&report, &settings)
    }

    /// Merge file configuration and flags; flags win
    pub fn resolve(&self, config: &CliConfig) -> Result<ResolvedSettings> {
        let mut evaluation = config.evaluation;
        if let Some(rule) = self.stress_rule {
            evaluation.stress_rule = rule.into();
        }
        if let Some(policy) = self.causative_prefix {
            evaluation.causative_prefix = policy.into();
        }

        let format = match self.format {
            Some(format) => format,
            None => config.output.format()?,
        };

        Ok(ResolvedSettings {
            evaluation,
            format,
            show_partial: self.show_partial || config.output.show_partial,
            pretty_json: config.output.pretty_json,
            parallel: self.parallel || self.threads.is_some_and(|t| t > 1) || config.performance.parallel,
            threads: self.threads.unwrap_or(config.performance.worker_threads),
        })
    }

    fn engine_config(&self, settings: &ResolvedSettings) -> EngineConfig {
        let mut engine = EngineConfig::default()
            .with_evaluation(settings.evaluation)
            .with_threads(settings.threads);

        if settings.parallel {
            engine.execution_mode = ExecutionMode::Parallel;
            let threads = engine.threads.unwrap_or_else(num_cpus::get);
            log::info!("parallel evaluation on {threads} thread(s)");
        }

        engine
    }

    fn write_report(&self, report: &CorpusReport, settings: &ResolvedSettings) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };

        let mut out = formatter(settings.format, writer, settings.show_partial, settings.pretty_json);
        for verb in &report.verbs {
            out.format_verb(verb)?;
        }
        out.format_summary(&report.summary)?;
        out.finish()?;

        if let Some(path) = &self.output {
            log::info!("report written to {}", path.display());
        }
        Ok(())
    }
}
