//! Colon-path lookups on nested mappings.
//!
//! A [`NestedMap`] owns one parsed translation document and resolves paths
//! such as `"home:menu:open"` one mapping level per segment. A path may never
//! be longer than the document's nesting depth; that check runs before any
//! traversal and is necessary but not sufficient, since branches can end at
//! different depths.

use crate::error::{I18nError, I18nResult};
use crate::format::{self, FormatArgs};
use serde_yaml::{Mapping, Value};
use tracing::trace;

/// Separator between key path segments
pub const PATH_SEPARATOR: char = ':';

/// Maximum chain length of directly nested mappings in `value`.
///
/// Scalars, sequences and empty mappings have depth 0.
pub fn value_depth(value: &Value) -> usize {
    match value {
        Value::Mapping(map) if !map.is_empty() => {
            1 + map
                .values()
                .filter(|child| child.is_mapping())
                .map(value_depth)
                .max()
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Read-only wrapper around one translation document
#[derive(Debug, Clone, PartialEq)]
pub struct NestedMap {
    root: Value,
    depth: usize,
}

impl NestedMap {
    /// Wrap a parsed document. The depth is computed once here.
    pub fn new(root: Value) -> Self {
        let depth = value_depth(&root);
        Self { root, depth }
    }

    /// An empty document; every lookup misses.
    pub fn empty() -> Self {
        Self::new(Value::Mapping(Mapping::new()))
    }

    /// Nesting depth of the document
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Resolve `path` strictly.
    ///
    /// Fails with [`I18nError::PathTooDeep`] when the path has more segments
    /// than the document depth, and with [`I18nError::KeyNotFound`] when a
    /// segment is absent or the value reached so far is not a mapping.
    pub fn resolve(&self, path: &str) -> I18nResult<&Value> {
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        if segments.len() > self.depth {
            return Err(I18nError::PathTooDeep {
                path: path.to_string(),
                segments: segments.len(),
                max_depth: self.depth,
            });
        }

        let mut current = &self.root;
        for segment in segments {
            let next = match current {
                Value::Mapping(map) => map.get(segment),
                _ => None,
            };
            current = next.ok_or_else(|| I18nError::KeyNotFound {
                path: path.to_string(),
                segment: segment.to_string(),
            })?;
        }
        Ok(current)
    }

    /// Resolve `path`, returning `default` when the path is too deep or a key
    /// is missing.
    ///
    /// With `format`, every string inside the resolved value is rendered
    /// against it. Formatting failures always propagate.
    pub fn get(
        &self,
        path: &str,
        default: Option<Value>,
        format: Option<&FormatArgs>,
    ) -> I18nResult<Option<Value>> {
        match self.resolve(path) {
            Ok(value) => match format {
                Some(args) => format::apply(value, args).map(Some),
                None => Ok(Some(value.clone())),
            },
            Err(err) if err.is_lookup_miss() => {
                trace!(path, error = %err, "lookup missed, using default");
                Ok(default)
            }
            Err(err) => Err(err),
        }
    }

    /// Like [`NestedMap::get`] with a concrete fallback value.
    pub fn get_or(
        &self,
        path: &str,
        default: Value,
        format: Option<&FormatArgs>,
    ) -> I18nResult<Value> {
        Ok(self
            .get(path, Some(default), format)?
            .unwrap_or(Value::Null))
    }

    /// Whether `path` resolves to a value
    pub fn contains(&self, path: &str) -> bool {
        self.resolve(path).is_ok()
    }
}

impl From<Value> for NestedMap {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl Default for NestedMap {
    fn default() -> Self {
        Self::empty()
    }
}

/// Pivot `{language: {key: text}}` into `{key: {language: text}}`.
///
/// Entries that are not mappings are copied under their language key as-is.
/// A later language entry whose key collides with such a copied scalar
/// replaces it with a fresh mapping.
pub fn rewrap(translations: &Mapping) -> Mapping {
    let mut result = Mapping::new();
    for (language, entries) in translations {
        match entries {
            Value::Mapping(entries) => {
                for (key, text) in entries {
                    if !matches!(result.get(key), Some(Value::Mapping(_))) {
                        result.insert(key.clone(), Value::Mapping(Mapping::new()));
                    }
                    if let Some(Value::Mapping(slot)) = result.get_mut(key) {
                        slot.insert(language.clone(), text.clone());
                    }
                }
            }
            other => {
                result.insert(language.clone(), other.clone());
            }
        }
    }
    result
}
