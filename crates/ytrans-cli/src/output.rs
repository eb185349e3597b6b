//! Serialization of command results

use crate::cli::OutputFormat;
use crate::error::CliResult;
use ytrans_i18n::Value;

/// Encode `value` for stdout; the result always ends with a newline
pub fn render(value: &Value, format: OutputFormat) -> CliResult<String> {
    let mut text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
