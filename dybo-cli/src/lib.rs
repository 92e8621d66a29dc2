//! Dybo CLI library
//!
//! This library provides the command-line interface for evaluating Dybo's
//! Rule against the annotated Abkhaz verb corpus.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
