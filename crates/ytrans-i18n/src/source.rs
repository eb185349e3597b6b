//! Translation file formats and document loading

use crate::error::{I18nError, I18nResult};
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions recognized when none are configured
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Structured text formats a translation file can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// YAML 1.2 (`.yaml`, `.yml`)
    Yaml,
    /// JSON (`.json`)
    Json,
    /// TOML (`.toml`)
    Toml,
}

impl SourceFormat {
    /// Parser for a file extension, with or without the leading dot.
    /// Matching ignores ASCII case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match normalize(extension).as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Decode `content` into the shared value model
    pub fn parse(self, content: &str) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            Self::Yaml => Ok(serde_yaml::from_str::<Value>(content)?),
            Self::Json => {
                let value: serde_json::Value = serde_json::from_str(content)?;
                Ok(serde_yaml::to_value(value)?)
            }
            Self::Toml => {
                let value: toml::Value = toml::from_str(content)?;
                Ok(serde_yaml::to_value(value)?)
            }
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        })
    }
}

fn normalize(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_ascii_lowercase()
}

/// The set of file extensions treated as translation files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: Vec<String>,
}

impl ExtensionSet {
    /// Build a set, rejecting extensions without a parser.
    ///
    /// Leading dots are stripped and case is folded; duplicates collapse.
    pub fn new<I, S>(extensions: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for extension in extensions {
            let extension = normalize(extension.as_ref());
            if SourceFormat::from_extension(&extension).is_none() {
                return Err(I18nError::UnsupportedExtension { extension });
            }
            if !normalized.contains(&extension) {
                normalized.push(extension);
            }
        }
        Ok(Self {
            extensions: normalized,
        })
    }

    /// Parser for `path` if its extension is in the set
    pub fn format_for(&self, path: &Path) -> Option<SourceFormat> {
        let extension = path.extension()?.to_str()?;
        let extension = normalize(extension);
        if self.extensions.contains(&extension) {
            SourceFormat::from_extension(&extension)
        } else {
            None
        }
    }

    /// Extensions in configuration order, without dots
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Read and decode one translation file.
///
/// An empty or null document yields an empty mapping; any other non-mapping
/// top level is a parse error.
pub fn load_document(path: &Path, format: SourceFormat) -> I18nResult<Value> {
    debug!("Loading translation file: {:?} ({})", path, format);
    let content = fs::read_to_string(path).map_err(|e| I18nError::io(path, e))?;
    parse_document(path, &content, format)
}

/// Decode already-read content; `path` is only used in errors.
pub fn parse_document(path: &Path, content: &str, format: SourceFormat) -> I18nResult<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Mapping(Mapping::new()));
    }

    match format.parse(content).map_err(|e| I18nError::parse(path, e))? {
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        mapping @ Value::Mapping(_) => Ok(mapping),
        other => Err(I18nError::parse(
            path,
            format!("top level must be a mapping, found {}", kind(&other)),
        )),
    }
}

/// Direct children of `dir`, sorted by file name so load order is stable.
pub(crate) fn sorted_entries(dir: &Path) -> I18nResult<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| I18nError::io(dir, e))? {
        let entry = entry.map_err(|e| I18nError::io(dir, e))?;
        entries.push(entry.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
