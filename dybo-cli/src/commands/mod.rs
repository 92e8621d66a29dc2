//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use dybo_core::{CausativePrefix, StressRule};

pub mod evaluate;
pub mod generate_config;
pub mod validate;

use crate::output::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate Dybo's Rule on one or more corpus files
    Evaluate(evaluate::EvaluateArgs),

    /// Check corpus files without evaluating them
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Evaluate(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List stress rules
    Rules,

    /// List causative-prefix segmentation policies
    Policies,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Text printed by the subcommand
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Rules => {
                out.push_str("Stress rules:\n");
                for rule in StressRule::ALL {
                    out.push_str(&format!("  {:<14} {}\n", rule.as_str(), rule.description()));
                }
            }
            ListCommands::Policies => {
                out.push_str("Causative-prefix policies:\n");
                for policy in CausativePrefix::ALL {
                    let note = match policy {
                        CausativePrefix::Unsegmented => "prefix segmented with the rest of the root (default)",
                        CausativePrefix::LeadingElement => "prefix carved out as the first root element",
                    };
                    out.push_str(&format!("  {:<16} {note}\n", policy.as_str()));
                }
            }
            ListCommands::Formats => {
                out.push_str("Output formats:\n");
                for value in OutputFormat::value_variants().iter().filter_map(|f| f.to_possible_value()) {
                    let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                    out.push_str(&format!("  {:<6} {help}\n", value.get_name()));
                }
            }
        }
        out
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_repeatable() {
        init_logging(1, false);
        init_logging(0, true);
    }

    #[test]
    fn test_list_rules_names_every_rule() {
        let out = ListCommands::Rules.render();
        for rule in StressRule::ALL {
            assert!(out.contains(rule.as_str()));
        }
    }

    #[test]
    fn test_list_policies() {
        let out = ListCommands::Policies.render();
        assert!(out.contains("unsegmented"));
        assert!(out.contains("leading-element"));
    }

    #[test]
    fn test_list_formats() {
        let out = ListCommands::Formats.render();
        assert!(out.contains("text"));
        assert!(out.contains("json"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Rules,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Rules"));
    }
}
