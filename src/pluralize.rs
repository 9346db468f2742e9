//! Element naming for sequence items.
//!
//! When a field holds a sequence, every item becomes a child element whose
//! name comes from the [`Pluralizer`]. The pluralizer is given the *field*
//! name (the parent element's name), never the name of another item.
//!
//! ```rust
//! use serde_toxml::{xml, EncoderOptions, Pluralizer};
//!
//! let options = EncoderOptions::new().with_pluralizer(Pluralizer::hook(|name| {
//!     name.strip_suffix('s').unwrap_or("item").to_string()
//! }));
//! let xml = serde_toxml::to_string_with_options("root", &xml!({"tags": ["a", "b"]}), options)
//!     .unwrap();
//! assert_eq!(xml, "<root><tags><tag>a</tag><tag>b</tag></tags></root>");
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Strategy mapping a sequence's field name to its items' element name.
#[derive(Clone)]
pub enum Pluralizer {
    /// Every item is named the same, regardless of the field.
    Constant(String),
    /// Explicit field-to-item names. A field without an entry is an error.
    Mapping(IndexMap<String, String>),
    /// Arbitrary naming logic.
    Hook(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl Default for Pluralizer {
    fn default() -> Self {
        Pluralizer::Constant("item".to_string())
    }
}

impl Pluralizer {
    #[must_use]
    pub fn constant(name: &str) -> Self {
        Pluralizer::Constant(name.to_string())
    }

    /// Builds a mapping pluralizer from `(field, item)` pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_toxml::Pluralizer;
    ///
    /// let p = Pluralizer::mapping([("people", "person"), ("mice", "mouse")]);
    /// assert_eq!(p.pluralize("people").unwrap(), "person");
    /// assert!(p.pluralize("geese").is_err());
    /// ```
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Pluralizer::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn hook<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Pluralizer::Hook(Arc::new(f))
    }

    /// Returns the element name for items of the sequence held by `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPlural`] when a mapping has no entry for `name`.
    pub fn pluralize(&self, name: &str) -> Result<String> {
        match self {
            Pluralizer::Constant(item) => Ok(item.clone()),
            Pluralizer::Mapping(map) => map
                .get(name)
                .cloned()
                .ok_or_else(|| Error::unknown_plural(name)),
            Pluralizer::Hook(f) => Ok(f(name)),
        }
    }
}

impl fmt::Debug for Pluralizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pluralizer::Constant(item) => f.debug_tuple("Constant").field(item).finish(),
            Pluralizer::Mapping(map) => f.debug_tuple("Mapping").field(map).finish(),
            Pluralizer::Hook(_) => f.write_str("Hook(..)"),
        }
    }
}
