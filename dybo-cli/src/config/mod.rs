//! Configuration module
//!
//! The optional TOML file has three tables. Every key is optional and
//! command-line flags win over file values.
//!
//! ```toml
//! [evaluation]
//! stress_rule = "dybo"
//! causative_prefix = "unsegmented"
//!
//! [output]
//! default_format = "text"
//! show_partial = false
//! pretty_json = true
//!
//! [performance]
//! parallel = false
//! worker_threads = 0
//! ```

use anyhow::{Context, Result};
use clap::ValueEnum;
use dybo_core::EvaluationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Evaluation settings
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Report verbs below 7/7
    pub show_partial: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            show_partial: false,
            pretty_json: true,
        }
    }
}

impl OutputConfig {
    /// Parse `default_format` into a known format
    pub fn format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.default_format, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{}'", self.default_format)).into()
        })
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Evaluate verbs on a thread pool
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dybo_core::{CausativePrefix, StressRule};

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output.format().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_partial_tables() {
        let config = CliConfig::from_toml_str(
            r#"
[evaluation]
stress_rule = "root-final"
causative_prefix = "leading-element"

[performance]
worker_threads = 4
"#,
        )
        .unwrap();

        assert_eq!(config.evaluation.stress_rule, StressRule::RootFinal);
        assert_eq!(config.evaluation.causative_prefix, CausativePrefix::LeadingElement);
        assert_eq!(config.performance.worker_threads, 4);
        assert!(!config.performance.parallel);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        let err = CliConfig::from_toml_str("[evaluation]\nstress_rule = \"penultimate\"\n").unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_unknown_format() {
        let config = CliConfig::from_toml_str("[output]\ndefault_format = \"xml\"\n").unwrap();
        assert!(config.output.format().is_err());
    }
}
