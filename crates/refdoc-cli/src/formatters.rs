//! Output formatters for CLI commands.
//!
//! Every command builds a serializable result and hands it to
//! [`format_output`], so the three formats always carry the same fields.

use anyhow::Result;
use colored::Colorize;
use refdoc_core::cli::OutputFormat;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use refdoc_cli::formatters::format_output;
/// use refdoc_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     source: String,
///     page_count: usize,
/// }
///
/// let summary = Summary {
///     source: "webgestaltpy".to_string(),
///     page_count: 3,
/// };
///
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"page_count\": 3"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format data as single-line JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Format data as single-line JSON, for piping into other tools.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;
    use std::fmt::Write;

    /// Format data as an indented, colorized outline.
    ///
    /// Objects become `key: value` lines and arrays become `-` items.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        match &value {
            Value::Object(_) | Value::Array(_) => write_nested(&mut out, &value, 0)?,
            scalar => out.push_str(&scalar_text(scalar)),
        }
        Ok(out.trim_end().to_string())
    }

    fn scalar_text(value: &Value) -> String {
        match value {
            Value::Null => "-".dimmed().to_string(),
            Value::Bool(true) => "yes".green().to_string(),
            Value::Bool(false) => "no".yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.clone(),
            Value::Array(a) if a.is_empty() => "none".dimmed().to_string(),
            Value::Object(_) | Value::Array(_) => String::new(),
        }
    }

    fn is_nested(value: &Value) -> bool {
        match value {
            Value::Array(a) => !a.is_empty(),
            Value::Object(_) => true,
            _ => false,
        }
    }

    fn write_nested(out: &mut String, value: &Value, depth: usize) -> Result<()> {
        let pad = "  ".repeat(depth);
        match value {
            Value::Object(map) => {
                for (key, val) in map {
                    if is_nested(val) {
                        writeln!(out, "{pad}{}:", key.blue().bold())?;
                        write_nested(out, val, depth + 1)?;
                    } else {
                        writeln!(out, "{pad}{}: {}", key.blue().bold(), scalar_text(val))?;
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::Object(map) if !map.is_empty() => {
                            // Inline object: first field on the bullet line.
                            let mut fields = String::new();
                            write_nested(&mut fields, item, depth + 1)?;
                            let trimmed = fields.trim_start();
                            writeln!(out, "{pad}- {}", trimmed.trim_end())?;
                        }
                        _ if is_nested(item) => {
                            writeln!(out, "{pad}-")?;
                            write_nested(out, item, depth + 1)?;
                        }
                        _ => writeln!(out, "{pad}- {}", scalar_text(item))?,
                    }
                }
            }
            scalar => writeln!(out, "{pad}{}", scalar_text(scalar))?,
        }
        Ok(())
    }
}
