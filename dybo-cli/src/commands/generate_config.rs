//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

/// Commented configuration template with every default spelled out
pub const TEMPLATE: &str = r#"# Configuration for `dybo evaluate`
# Command-line flags override every value below.

[evaluation]
# Stress rule: dybo, word-initial, word-final, root-initial, root-final
stress_rule = "dybo"
# Causative prefix in root segmentation: unsegmented, leading-element
causative_prefix = "unsegmented"

[output]
# text or json
default_format = "text"
# Report verbs below 7/7 with their best hypothesis
show_partial = false
pretty_json = true

[performance]
# Evaluate verbs on a thread pool
parallel = false
# 0 = one thread per core
worker_threads = 0
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        std::fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!("  Use it with: dybo evaluate -i CORPUS -c {}", self.output.display());
        Ok(())
    }
}
