//! Presentation layer for stockroom
//!
//! CLI command definitions and console output formatting. The engine
//! itself lives below; this crate only collects input and renders
//! outcomes.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, KindArg, OutputFormat, parse_stock_request};
pub use output::console::ConsoleFormatter;
