//! Input handling: corpus file patterns and reading

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::{resolve_patterns, CorpusSource};
