//! Custom serialization: values that build their own elements.
//!
//! Any type can take part in encoding by implementing [`ToXml`] and being
//! wrapped in [`Value::Custom`]. The engine hands the implementation the
//! target element, the current field name and a [`Traversal`] handle for
//! encoding nested payloads. [`Attributes`] and [`CData`] are the built-in
//! implementations.
//!
//! ```rust
//! use serde_toxml::{xml, Attributes, CData, Encoder, Value, XmlMap};
//!
//! let mut doc = XmlMap::new();
//! doc.insert("link".to_string(), Value::from(Attributes::new("home", [("href", "/")])));
//! doc.insert("script".to_string(), Value::from(CData::new("a < b")));
//!
//! let mut encoder = Encoder::new("page", doc).unwrap();
//! encoder.encode().unwrap();
//! assert_eq!(
//!     encoder.to_string(),
//!     r#"<page><link href="/">home</link><script><![CDATA[a < b]]></script></page>"#
//! );
//! ```

use crate::engine::Traversal;
use crate::tree::Element;
use crate::{Result, Value};
use indexmap::IndexMap;
use std::any;
use std::fmt;

/// A value that converts itself into XML.
///
/// A handler registered for the implementor's [`Kind`](crate::Kind) takes
/// precedence over this implementation.
pub trait ToXml: fmt::Debug + Send + Sync {
    /// Populates `element`, whose field name is `name`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the tree or from nested traversal.
    fn serialize_into(
        &self,
        element: &mut Element,
        name: &str,
        engine: &mut Traversal<'_>,
    ) -> Result<()>;

    /// The registry key name for this type.
    fn kind_name(&self) -> &'static str {
        any::type_name::<Self>()
    }
}

/// Wraps a payload with attributes for the element it lands in.
///
/// The attributes are always applied. A mapping payload then becomes child
/// elements, any other present payload is encoded as the element's value,
/// and an absent payload (null, empty string or empty container) leaves the
/// element self-closing.
///
/// Only those payloads count as absent. Falsy scalars such as `false` and `0`
/// are present and render as text (`<b k="v">0</b>`); wrap [`Value::Null`]
/// to get a self-closing element.
///
/// # Examples
///
/// ```rust
/// use serde_toxml::{Attributes, Encoder, Value, XmlMap};
///
/// let mut map = XmlMap::new();
/// map.insert("b".to_string(), Value::from(Attributes::new(Value::Null, [("one", "two")])));
///
/// let mut encoder = Encoder::new("a", map).unwrap();
/// encoder.encode().unwrap();
/// assert_eq!(encoder.to_string(), r#"<a><b one="two"/></a>"#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Attributes {
    data: Value,
    attributes: IndexMap<String, String>,
}

impl Attributes {
    pub fn new<D, I, K, V>(data: D, attributes: I) -> Self
    where
        D: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Attributes {
            data: data.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn data(&self) -> &Value {
        &self.data
    }

    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) | Value::Tuple(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

impl ToXml for Attributes {
    fn serialize_into(
        &self,
        element: &mut Element,
        name: &str,
        engine: &mut Traversal<'_>,
    ) -> Result<()> {
        for (key, value) in &self.attributes {
            element.set_attribute(key, value)?;
        }

        if !is_present(&self.data) {
            return Ok(());
        }
        match &self.data {
            Value::Object(map) => engine.mapping(map, element),
            other => engine.traverse(other, element, name),
        }
    }
}

/// Text emitted as a CDATA section, exempt from escaping and from the
/// illegal-character policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CData(String);

impl CData {
    pub fn new<S: Into<String>>(text: S) -> Self {
        CData(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ToXml for CData {
    fn serialize_into(
        &self,
        element: &mut Element,
        _name: &str,
        _engine: &mut Traversal<'_>,
    ) -> Result<()> {
        element.set_cdata(&self.0);
        Ok(())
    }
}

impl From<Attributes> for Value {
    fn from(value: Attributes) -> Self {
        Value::custom(value)
    }
}

impl From<CData> for Value {
    fn from(value: CData) -> Self {
        Value::custom(value)
    }
}
