//! Registry of translation groups loaded from a root directory

use crate::error::{I18nError, I18nResult};
use crate::format::FormatArgs;
use crate::source::{self, ExtensionSet};
use crate::table::LanguageTable;
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Root directory used by [`GroupRegistry::load_default`]
pub const DEFAULT_ROOT: &str = "translations";

/// Every translation group under one root directory.
///
/// ```text
/// <root>/
///   <group>/
///     <language>.<ext>
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    /// Directory the groups were loaded from
    root: PathBuf,
    /// Group names in load order
    order: Vec<String>,
    /// Language table per group name
    tables: HashMap<String, LanguageTable>,
}

impl GroupRegistry {
    /// Load every subdirectory of `root` as a [`LanguageTable`].
    ///
    /// Plain files directly under `root` are ignored.
    pub fn load<P: AsRef<Path>>(root: P, extensions: &ExtensionSet) -> I18nResult<Self> {
        let root = root.as_ref();
        debug!("Loading translation groups from {:?}", root);

        let mut registry = Self {
            root: root.to_path_buf(),
            ..Self::default()
        };

        for path in source::sorted_entries(root)? {
            if !path.is_dir() {
                debug!("Skipping non-directory entry: {:?}", path);
                continue;
            }
            registry.insert(LanguageTable::load(&path, extensions)?);
        }

        info!(
            "Loaded {} translation groups from {:?}: {:?}",
            registry.len(),
            root,
            registry.groups()
        );
        Ok(registry)
    }

    /// Load `translations/` relative to the working directory with the
    /// default extensions
    pub fn load_default() -> I18nResult<Self> {
        Self::load(DEFAULT_ROOT, &ExtensionSet::default())
    }

    /// Build a registry from tables assembled in memory
    pub fn from_tables<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = LanguageTable>,
    {
        let mut registry = Self::default();
        for table in tables {
            registry.insert(table);
        }
        registry
    }

    /// Register `table` under its name, replacing an existing group in place
    pub fn insert(&mut self, table: LanguageTable) {
        let group = table.name().to_string();
        if self.tables.insert(group.clone(), table).is_some() {
            warn!("Group '{}' was loaded more than once, keeping the last one", group);
        } else {
            self.order.push(group);
        }
    }

    /// The language table of `group`
    pub fn get(&self, group: &str) -> I18nResult<&LanguageTable> {
        self.tables
            .get(group)
            .ok_or_else(|| I18nError::GroupNotFound {
                group: group.to_string(),
            })
    }

    /// Look up `path` for one language of one group
    pub fn translate(
        &self,
        group: &str,
        path: &str,
        language: &str,
        format: Option<&FormatArgs>,
    ) -> I18nResult<Option<Value>> {
        self.get(group)?.get(path, language, format)
    }

    /// Group names in load order
    pub fn groups(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Tables in load order
    pub fn iter(&self) -> impl Iterator<Item = &LanguageTable> {
        self.order.iter().filter_map(|group| self.tables.get(group))
    }

    pub fn contains(&self, group: &str) -> bool {
        self.tables.contains_key(group)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Directory the registry was loaded from; empty for in-memory registries
    pub fn root(&self) -> &Path {
        &self.root
    }
}
