//! The recursive traversal engine.
//!
//! [`Traversal`] walks a [`Value`] into an [`Element`]. For every value it
//! looks the value's [`Kind`](crate::Kind) up in the registry; when no handler
//! is registered it falls back to the value's own [`ToXml`](crate::ToXml)
//! implementation, and fails with [`Error::UnknownType`] when there is none.
//!
//! The "current name" threaded through the walk is the name of the field being
//! encoded. Mapping entries pass their key down; sequence items pass down the
//! name of the field holding the sequence, so the pluralizer always sees the
//! logical field name.
//!
//! Handlers and `ToXml` implementations receive `&mut Traversal` and compose
//! through [`Traversal::traverse`], [`Traversal::mapping`],
//! [`Traversal::sequence`] and [`Traversal::text`].

use crate::options::{EncoderOptions, IllegalChars};
use crate::registry::Registry;
use crate::tree::Element;
use crate::{Error, Pluralizer, Result, Value, XmlMap};
use tracing::trace;

/// A single encoding pass over a structure.
pub struct Traversal<'a> {
    registry: &'a Registry,
    pluralizer: &'a Pluralizer,
    illegal_chars: &'a IllegalChars,
    max_depth: usize,
    depth: usize,
}

impl<'a> Traversal<'a> {
    pub fn new(registry: &'a Registry, options: &'a EncoderOptions) -> Self {
        Traversal {
            registry,
            pluralizer: &options.pluralizer,
            illegal_chars: &options.illegal_chars,
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Encodes `value` into `element`, whose field name is `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] for values with neither a handler nor a
    /// custom serialization, [`Error::DepthLimitExceeded`] past the depth
    /// limit, and propagates any handler or tree error.
    pub fn traverse(&mut self, value: &Value, element: &mut Element, name: &str) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Error::depth_limit(self.max_depth, element.name()));
        }
        self.depth += 1;
        let result = self.dispatch(value, element, name);
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, value: &Value, element: &mut Element, name: &str) -> Result<()> {
        let kind = value.kind();
        let registry = self.registry;

        if let Some(handler) = registry.lookup(kind) {
            trace!(%kind, name, depth = self.depth, "dispatching to registered handler");
            return handler(self, value, element, name);
        }

        if let Some(custom) = value.as_to_xml() {
            trace!(%kind, name, depth = self.depth, "dispatching to custom serialization");
            return custom.serialize_into(element, name, self);
        }

        Err(Error::unknown_type(kind))
    }

    /// Adds one child per entry, named by the entry's key, in insertion order.
    ///
    /// # Errors
    ///
    /// Fails on a key that is not a valid element name, or on any nested error.
    pub fn mapping(&mut self, map: &XmlMap, element: &mut Element) -> Result<()> {
        for (key, value) in map {
            let child = element.create_child(key)?;
            self.traverse(value, child, key)?;
        }
        Ok(())
    }

    /// Adds one child per item, named by the pluralizer from `name`.
    ///
    /// # Errors
    ///
    /// Fails when the pluralizer has no name for `name`, or on any nested error.
    pub fn sequence(&mut self, items: &[Value], element: &mut Element, name: &str) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        let item_name = self.pluralizer.pluralize(name)?;
        for item in items {
            let child = element.create_child(&item_name)?;
            self.traverse(item, child, name)?;
        }
        Ok(())
    }

    /// Sets `element`'s text after applying the illegal-character policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalContent`] under the strict policy.
    pub fn text(&mut self, element: &mut Element, text: &str) -> Result<()> {
        let cleaned = self.illegal_chars.clean(text);
        element.set_text(&cleaned)
    }

    /// Number of values currently being encoded, counting the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}
