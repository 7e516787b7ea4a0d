//! Output formatting utilities

use std::fmt::Display;

use colored::*;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Render a result in the requested format.
///
/// `text` is what plain-text mode shows; the structured formats serialize
/// `value` instead.
pub fn render<T: Serialize + ?Sized>(
    value: &T,
    text: impl Display,
    format: OutputFormat,
) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Text => text.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
    })
}

/// Print a result in the requested format.
pub fn print_value<T: Serialize + ?Sized>(
    value: &T,
    text: impl Display,
    format: OutputFormat,
) -> CliResult<()> {
    println!("{}", render(value, text, format)?);
    Ok(())
}

/// Format a list as `[a, b, c]`.
pub fn bracketed<T: Display>(items: &[T]) -> String {
    let inner: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", inner.join(", "))
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
