//! Nested translation lookups for ytrans
//!
//! Translations live on disk as one directory per group and one file per
//! language:
//!
//! - [`GroupRegistry`] loads every group directory under a root
//! - [`LanguageTable`] holds the language documents of one group
//! - [`NestedMap`] resolves colon-separated key paths such as `home:menu:open`
//! - [`FormatArgs`] fills `{name}` placeholders in the resolved strings
//!
//! # Example
//!
//! ```rust
//! use ytrans_i18n::{format_values, LanguageTable, Value};
//!
//! let en: Value = serde_yaml::from_str("home: {greeting: 'Hello, {name}!'}").unwrap();
//! let table = LanguageTable::from_documents("site", [("en", en)]);
//!
//! let greeting = table
//!     .get("home:greeting", "en", format_values!["name" => "Ana"].as_ref())
//!     .unwrap();
//! assert_eq!(greeting, Some(Value::String("Hello, Ana!".into())));
//! ```

pub mod error;
pub mod format;
pub mod nested;
pub mod registry;
pub mod source;
pub mod table;

pub use error::{I18nError, I18nResult};
pub use format::{apply, render, FormatArgs, FormatValue, MAX_FIELD_WIDTH};
pub use nested::{rewrap, value_depth, NestedMap, PATH_SEPARATOR};
pub use registry::{GroupRegistry, DEFAULT_ROOT};
pub use source::{load_document, parse_document, ExtensionSet, SourceFormat, DEFAULT_EXTENSIONS};
pub use table::LanguageTable;

// Re-export the value model so callers need no direct serde_yaml dependency
pub use serde_yaml::{Mapping, Value};
