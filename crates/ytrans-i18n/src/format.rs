//! Named placeholder substitution for resolved translations.
//!
//! Templates follow `str.format` conventions through [`strfmt`]: `{name}`
//! placeholders, `{{` / `}}` for literal braces, and an optional
//! `{name:[[fill]align][sign][width][.precision][type]}` spec. Text values
//! take string specs, numbers take numeric ones.

use crate::error::{I18nError, I18nResult};
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use std::fmt;
use strfmt::{strfmt_map, FmtError, Formatter};

/// Widest field width or precision a template may request
pub const MAX_FIELD_WIDTH: usize = 1024;

/// A value substituted into a template
#[derive(Debug, Clone, PartialEq)]
pub enum FormatValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for FormatValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FormatValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for FormatValue {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<char> for FormatValue {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

macro_rules! format_value_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for FormatValue {
                fn from(value: $source) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )+
    };
}

format_value_from!(Int as i64: i8, i16, i32, i64, isize);
format_value_from!(UInt as u64: u8, u16, u32, u64, usize);
format_value_from!(Float as f64: f32, f64);

/// Named values substituted into templates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatArgs {
    values: HashMap<String, FormatValue>,
}

impl FormatArgs {
    /// Create an empty set of format values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FormatValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FormatValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a value by placeholder name
    pub fn get(&self, key: &str) -> Option<&FormatValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormatArgs
where
    K: Into<String>,
    V: Into<FormatValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}

/// Build an `Option<FormatArgs>` from `key => value` pairs.
///
/// ```rust
/// use ytrans_i18n::{format_values, FormatValue};
///
/// let args = format_values!["name" => "Alice", "count" => 3];
/// assert_eq!(args.unwrap().get("count"), Some(&FormatValue::Int(3)));
/// ```
#[macro_export]
macro_rules! format_values {
    () => {
        None::<$crate::FormatArgs>
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::FormatArgs::new();
        $(
            args.insert($key, $value);
        )+
        Some(args)
    }};
}

/// Render every string inside `value`.
///
/// Mappings are rebuilt with the same keys in the same order; numbers,
/// booleans, null, sequences and tagged values are returned unchanged.
pub fn apply(value: &Value, args: &FormatArgs) -> I18nResult<Value> {
    match value {
        Value::String(text) => Ok(Value::String(render(text, args)?)),
        Value::Mapping(map) => {
            let mut rendered = Mapping::with_capacity(map.len());
            for (key, child) in map {
                rendered.insert(key.clone(), apply(child, args)?);
            }
            Ok(Value::Mapping(rendered))
        }
        other => Ok(other.clone()),
    }
}

/// Substitute the placeholders of one template string
pub fn render(template: &str, args: &FormatArgs) -> I18nResult<String> {
    strfmt_map(template, |mut fmt: Formatter| {
        let key = fmt.key;
        let oversized = fmt
            .width()
            .into_iter()
            .chain(fmt.precision())
            .any(|n| n > MAX_FIELD_WIDTH);
        if oversized {
            return Err(FmtError::Invalid(format!(
                "width and precision of '{key}' must not exceed {MAX_FIELD_WIDTH}"
            )));
        }

        match args.get(key) {
            Some(FormatValue::Text(text)) => fmt.str(text),
            Some(FormatValue::Int(n)) => fmt.i64(*n),
            Some(FormatValue::UInt(n)) => fmt.u64(*n),
            Some(FormatValue::Float(x)) => fmt.f64(*x),
            None => Err(FmtError::KeyError(key.to_string())),
        }
    })
    .map_err(|err| match err {
        FmtError::KeyError(key) => I18nError::MissingFormatKey { key },
        other => I18nError::InvalidTemplate {
            template: template.to_string(),
            reason: other.to_string(),
        },
    })
}
