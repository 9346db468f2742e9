//! The type registry: which handler encodes which [`Kind`].
//!
//! Every [`Encoder`](crate::Encoder) owns its own [`Registry`], built from the
//! defaults in [`Registry::default`]. Registering a handler for a kind that is
//! already present replaces it, so the registry doubles as an override
//! mechanism, including over a custom type's own [`ToXml`](crate::ToXml).
//!
//! ## Default handlers
//!
//! | kind | handler |
//! |------|---------|
//! | `Array`, `Tuple` | [`handlers::sequence`] |
//! | `Object` | [`handlers::mapping`] |
//! | `Bool` | [`handlers::boolean`] |
//! | `Integer`, `BigInt`, `Float` | [`handlers::number`] |
//! | `String` | [`handlers::text`] |
//!
//! `Null` has no default handler; register [`handlers::empty`] to allow it.
//!
//! ```rust
//! use serde_toxml::{handlers, Kind, Registry};
//!
//! let mut registry = Registry::default();
//! assert!(registry.lookup(Kind::Null).is_none());
//!
//! registry.register(Kind::Null, handlers::empty);
//! assert!(registry.lookup(Kind::Null).is_some());
//! ```

use crate::engine::Traversal;
use crate::tree::Element;
use crate::{Kind, Result, Value};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A function that populates `element` from a value of the kind it is
/// registered for. `name` is the current field name.
pub type Handler =
    Arc<dyn Fn(&mut Traversal<'_>, &Value, &mut Element, &str) -> Result<()> + Send + Sync>;

/// One or more kinds to register a handler for. Groups are flattened so each
/// kind gets its own entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KindSet(Vec<Kind>);

impl KindSet {
    pub fn iter(&self) -> impl Iterator<Item = &Kind> {
        self.0.iter()
    }
}

impl From<Kind> for KindSet {
    fn from(kind: Kind) -> Self {
        KindSet(vec![kind])
    }
}

impl<const N: usize> From<[Kind; N]> for KindSet {
    fn from(kinds: [Kind; N]) -> Self {
        KindSet(kinds.to_vec())
    }
}

impl From<&[Kind]> for KindSet {
    fn from(kinds: &[Kind]) -> Self {
        KindSet(kinds.to_vec())
    }
}

impl From<Vec<Kind>> for KindSet {
    fn from(kinds: Vec<Kind>) -> Self {
        KindSet(kinds)
    }
}

/// A flat, mutable table from [`Kind`] to [`Handler`].
#[derive(Clone)]
pub struct Registry {
    handlers: IndexMap<Kind, Handler>,
}

impl Registry {
    /// Creates a registry with no handlers at all.
    #[must_use]
    pub fn empty() -> Self {
        Registry {
            handlers: IndexMap::new(),
        }
    }

    /// Registers `handler` for every kind in `kinds`, replacing existing entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_toxml::{Kind, Registry};
    ///
    /// let mut registry = Registry::default();
    /// registry.register(Kind::NUMBERS, |engine, value, element, _name| {
    ///     engine.text(element, &format!("#{}", value.as_number().unwrap()))
    /// });
    /// assert_eq!(registry.len(), 8);
    /// ```
    pub fn register<K, F>(&mut self, kinds: K, handler: F)
    where
        K: Into<KindSet>,
        F: Fn(&mut Traversal<'_>, &Value, &mut Element, &str) -> Result<()> + Send + Sync + 'static,
    {
        self.register_handler(kinds, Arc::new(handler));
    }

    /// Registers an already shared handler.
    pub fn register_handler<K: Into<KindSet>>(&mut self, kinds: K, handler: Handler) {
        for kind in kinds.into().0 {
            self.handlers.insert(kind, Arc::clone(&handler));
        }
    }

    /// Exact-kind lookup.
    #[must_use]
    pub fn lookup(&self, kind: Kind) -> Option<&Handler> {
        self.handlers.get(&kind)
    }

    #[must_use]
    pub fn contains(&self, kind: Kind) -> bool {
        self.handlers.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.handlers.keys().copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Registry::empty();
        registry.register(Kind::SEQUENCES, handlers::sequence);
        registry.register(Kind::Object, handlers::mapping);
        registry.register(Kind::Bool, handlers::boolean);
        registry.register(Kind::NUMBERS, handlers::number);
        registry.register(Kind::String, handlers::text);
        registry
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

/// The built-in handlers.
pub mod handlers {
    use super::*;
    use crate::Error;

    fn mismatch(handler: &str, value: &Value) -> Error {
        Error::custom(format!(
            "{} handler cannot encode a {} value",
            handler,
            value.kind()
        ))
    }

    /// Each item becomes a child named by the pluralizer.
    ///
    /// # Errors
    ///
    /// Fails if `value` is not a sequence, or on any nested error.
    pub fn sequence(
        engine: &mut Traversal<'_>,
        value: &Value,
        element: &mut Element,
        name: &str,
    ) -> Result<()> {
        let items = value
            .as_sequence()
            .ok_or_else(|| mismatch("sequence", value))?;
        engine.sequence(items, element, name)
    }

    /// Each entry becomes a child named by its key.
    ///
    /// # Errors
    ///
    /// Fails if `value` is not a mapping, or on any nested error.
    pub fn mapping(
        engine: &mut Traversal<'_>,
        value: &Value,
        element: &mut Element,
        _name: &str,
    ) -> Result<()> {
        let map = value.as_object().ok_or_else(|| mismatch("mapping", value))?;
        engine.mapping(map, element)
    }

    /// Writes `true` or `false`.
    ///
    /// # Errors
    ///
    /// Fails if `value` is not a boolean.
    pub fn boolean(
        engine: &mut Traversal<'_>,
        value: &Value,
        element: &mut Element,
        _name: &str,
    ) -> Result<()> {
        let b = value.as_bool().ok_or_else(|| mismatch("boolean", value))?;
        engine.text(element, if b { "true" } else { "false" })
    }

    /// Writes the number's decimal representation.
    ///
    /// # Errors
    ///
    /// Fails if `value` is not a number.
    pub fn number(
        engine: &mut Traversal<'_>,
        value: &Value,
        element: &mut Element,
        _name: &str,
    ) -> Result<()> {
        let n = value.as_number().ok_or_else(|| mismatch("number", value))?;
        engine.text(element, &n.to_string())
    }

    /// Writes the string through the illegal-character policy.
    ///
    /// # Errors
    ///
    /// Fails if `value` is not a string, or if it holds illegal characters
    /// under the strict policy.
    pub fn text(
        engine: &mut Traversal<'_>,
        value: &Value,
        element: &mut Element,
        _name: &str,
    ) -> Result<()> {
        let s = value.as_str().ok_or_else(|| mismatch("text", value))?;
        engine.text(element, s)
    }

    /// Leaves the element untouched, so it renders self-closing.
    ///
    /// # Errors
    ///
    /// Never fails.
    pub fn empty(
        _engine: &mut Traversal<'_>,
        _value: &Value,
        _element: &mut Element,
        _name: &str,
    ) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CData;

    #[test]
    fn test_default_kinds() {
        let registry = Registry::default();
        for kind in [
            Kind::Array,
            Kind::Tuple,
            Kind::Object,
            Kind::Bool,
            Kind::Integer,
            Kind::BigInt,
            Kind::Float,
            Kind::String,
        ] {
            assert!(registry.contains(kind), "missing default for {}", kind);
        }
        assert!(!registry.contains(Kind::Null));
        assert!(!registry.contains(Kind::of::<CData>()));
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_group_registration_flattens() {
        let mut registry = Registry::empty();
        registry.register(Kind::SEQUENCES, handlers::empty);
        let kinds: Vec<_> = registry.kinds().collect();
        assert_eq!(kinds, vec![Kind::Array, Kind::Tuple]);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = Registry::empty();
        let first: Handler = Arc::new(handlers::empty);
        let second: Handler = Arc::new(handlers::text);
        registry.register_handler(Kind::String, Arc::clone(&first));
        registry.register_handler(Kind::String, Arc::clone(&second));
        assert_eq!(registry.len(), 1);
        let found = registry.lookup(Kind::String).unwrap();
        assert!(Arc::ptr_eq(found, &second));
    }

    #[test]
    fn test_clones_are_independent() {
        let template = Registry::default();
        let mut copy = template.clone();
        copy.register(Kind::Null, handlers::empty);
        assert!(copy.contains(Kind::Null));
        assert!(!template.contains(Kind::Null));
    }
}
