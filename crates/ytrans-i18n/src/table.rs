//! Per-group language tables

use crate::error::{I18nError, I18nResult};
use crate::format::FormatArgs;
use crate::nested::NestedMap;
use crate::source::{self, ExtensionSet};
use serde_yaml::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// All language variants of one translation group.
///
/// Each recognized file in the group directory becomes one entry keyed by
/// its file stem. Languages keep the order they were loaded in.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    /// Group name, taken from the directory name
    name: String,
    /// Language codes in load order
    languages: Vec<String>,
    /// Parsed document per language code
    documents: HashMap<String, NestedMap>,
}

impl LanguageTable {
    /// Create an empty table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load every recognized file directly inside `dir`.
    ///
    /// Subdirectories and files with other extensions are skipped. A file
    /// that cannot be read or parsed fails the whole table.
    pub fn load<P: AsRef<Path>>(dir: P, extensions: &ExtensionSet) -> I18nResult<Self> {
        let dir = dir.as_ref();
        let name = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        let mut table = Self::new(name);

        for path in source::sorted_entries(dir)? {
            if !path.is_file() {
                debug!("Skipping non-file entry: {:?}", path);
                continue;
            }
            let Some(format) = extensions.format_for(&path) else {
                debug!("Skipping unrecognized file: {:?}", path);
                continue;
            };
            let Some(language) = path.file_stem().and_then(|stem| stem.to_str()) else {
                warn!("Skipping file with a non UTF-8 name: {:?}", path);
                continue;
            };

            let document = source::load_document(&path, format)?;
            table.insert(language, NestedMap::new(document));
        }

        info!("Loaded language table {}", table);
        Ok(table)
    }

    /// Build a table from already-parsed documents
    pub fn from_documents<I, K>(name: impl Into<String>, documents: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut table = Self::new(name);
        for (language, document) in documents {
            table.insert(language, NestedMap::new(document));
        }
        table
    }

    /// Register `document` under `language`, replacing an existing entry
    /// in place.
    pub fn insert(&mut self, language: impl Into<String>, document: NestedMap) {
        let language = language.into();
        if self.documents.insert(language.clone(), document).is_some() {
            warn!(
                "Language '{}' in group '{}' was defined more than once, keeping the last file",
                language, self.name
            );
        } else {
            self.languages.push(language);
        }
    }

    /// The document loaded for `language`
    pub fn document(&self, language: &str) -> I18nResult<&NestedMap> {
        self.documents
            .get(language)
            .ok_or_else(|| I18nError::LanguageNotFound {
                group: self.name.clone(),
                language: language.to_string(),
            })
    }

    /// Look up `path` in one language; `None` when the path misses
    pub fn get(
        &self,
        path: &str,
        language: &str,
        format: Option<&FormatArgs>,
    ) -> I18nResult<Option<Value>> {
        self.document(language)?.get(path, None, format)
    }

    /// Look up `path` in one language with a fallback value
    pub fn get_or(
        &self,
        path: &str,
        language: &str,
        default: Value,
        format: Option<&FormatArgs>,
    ) -> I18nResult<Value> {
        self.document(language)?.get_or(path, default, format)
    }

    /// Resolve `path` strictly, reporting misses as errors
    pub fn resolve(&self, path: &str, language: &str) -> I18nResult<&Value> {
        self.document(language)?.resolve(path)
    }

    /// Look up `path` in every language, in load order
    pub fn get_all(
        &self,
        path: &str,
        format: Option<&FormatArgs>,
    ) -> I18nResult<Vec<(String, Option<Value>)>> {
        self.languages
            .iter()
            .map(|language| Ok((language.clone(), self.get(path, language, format)?)))
            .collect()
    }

    /// Language codes in load order
    pub fn languages(&self) -> Vec<&str> {
        self.languages.iter().map(String::as_str).collect()
    }

    pub fn contains(&self, language: &str) -> bool {
        self.documents.contains_key(language)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Group name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for LanguageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.languages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format_values;

    fn yaml(source: &str) -> Value {
        serde_yaml::from_str(source).unwrap()
    }

    fn site() -> LanguageTable {
        LanguageTable::from_documents(
            "site",
            [
                ("en", yaml("home: {title: Welcome, greeting: 'Hello, {name}!'}")),
                ("fr", yaml("home: {title: Bienvenue}")),
            ],
        )
    }

    #[test]
    fn languages_keep_insertion_order() {
        let table = site();
        assert_eq!(table.languages(), vec!["en", "fr"]);
        assert_eq!(table.len(), 2);
        assert!(table.contains("fr"));
        assert!(!table.contains("de"));
        assert_eq!(table.to_string(), "site [en, fr]");
    }

    #[test]
    fn get_delegates_to_the_language_document() {
        let table = site();
        assert_eq!(
            table.get("home:title", "fr", None).unwrap(),
            Some(Value::String("Bienvenue".into()))
        );
        assert_eq!(table.get("home:greeting", "fr", None).unwrap(), None);
        assert_eq!(
            table
                .get_or("home:greeting", "fr", Value::String("N/A".into()), None)
                .unwrap(),
            Value::String("N/A".into())
        );
    }

    #[test]
    fn unknown_language_is_an_error() {
        let table = site();
        match table.get("home:title", "de", None) {
            Err(I18nError::LanguageNotFound { group, language }) => {
                assert_eq!(group, "site");
                assert_eq!(language, "de");
            }
            other => panic!("expected LanguageNotFound, got {other:?}"),
        }
        assert!(table.resolve("home:title", "de").is_err());
    }

    #[test]
    fn resolve_reports_misses() {
        let table = site();
        assert!(matches!(
            table.resolve("home:missing", "en"),
            Err(I18nError::KeyNotFound { .. })
        ));
        assert!(matches!(
            table.resolve("home:title:x", "en"),
            Err(I18nError::PathTooDeep { .. })
        ));
    }

    #[test]
    fn get_all_covers_every_language() {
        let table = site();
        let all = table
            .get_all("home:greeting", format_values!["name" => "Ana"].as_ref())
            .unwrap();
        assert_eq!(
            all,
            vec![
                ("en".to_string(), Some(Value::String("Hello, Ana!".into()))),
                ("fr".to_string(), None),
            ]
        );
    }

    #[test]
    fn duplicate_language_keeps_position_and_last_document() {
        let table = LanguageTable::from_documents(
            "site",
            [
                ("en", yaml("a: first")),
                ("fr", yaml("a: french")),
                ("en", yaml("a: second")),
            ],
        );
        assert_eq!(table.languages(), vec!["en", "fr"]);
        assert_eq!(
            table.get("a", "en", None).unwrap(),
            Some(Value::String("second".into()))
        );
    }

    #[test]
    fn empty_table() {
        let table = LanguageTable::new("empty");
        assert!(table.is_empty());
        assert_eq!(table.get_all("a", None).unwrap(), vec![]);
        assert_eq!(table.to_string(), "empty []");
    }
}
