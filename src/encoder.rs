//! The encoder facade.
//!
//! An [`Encoder`] owns the root element, the structure to encode, its options
//! and its own [`Registry`]. The lifecycle is: construct, optionally
//! [`register`](Encoder::register) handlers, call [`encode`](Encoder::encode)
//! once, then render with `to_string()` as often as needed.
//!
//! ```rust
//! use serde_toxml::{xml, Encoder};
//!
//! let mut encoder = Encoder::new("root", xml!({"a": [1, 2]})).unwrap();
//! encoder.encode().unwrap();
//! assert_eq!(
//!     encoder.to_string(),
//!     "<root><a><item>1</item><item>2</item></a></root>"
//! );
//! ```

use crate::engine::Traversal;
use crate::registry::{KindSet, Registry};
use crate::tree::{render, Element};
use crate::{EncoderOptions, Error, Result, Value};
use std::fmt;
use std::io;
use tracing::debug;

/// Converts one structure into one XML document.
#[derive(Debug)]
pub struct Encoder {
    root: Element,
    root_name: String,
    structure: Value,
    options: EncoderOptions,
    registry: Registry,
}

impl Encoder {
    /// Creates an encoder with default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `root_name` is not a legal element name.
    pub fn new<V: Into<Value>>(root_name: &str, structure: V) -> Result<Self> {
        Self::with_options(root_name, structure, EncoderOptions::default())
    }

    /// Creates an encoder with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `root_name` or a root attribute name
    /// is invalid, and [`Error::IllegalContent`] for an illegal root
    /// attribute value.
    pub fn with_options<V: Into<Value>>(
        root_name: &str,
        structure: V,
        options: EncoderOptions,
    ) -> Result<Self> {
        let root = Element::with_attributes(root_name, &options.root_attributes)?;
        Ok(Encoder {
            root,
            root_name: root_name.to_string(),
            structure: structure.into(),
            options,
            registry: Registry::default(),
        })
    }

    /// Registers a handler on this encoder only. The last registration for a
    /// kind wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_toxml::{xml, Encoder, Kind};
    ///
    /// let mut encoder = Encoder::new("root", xml!({"missing": null})).unwrap();
    /// encoder.register(Kind::Null, |engine, _value, element, _name| {
    ///     engine.text(element, "nil")
    /// });
    /// encoder.encode().unwrap();
    /// assert_eq!(encoder.to_string(), "<root><missing>nil</missing></root>");
    /// ```
    pub fn register<K, F>(&mut self, kinds: K, handler: F)
    where
        K: Into<KindSet>,
        F: Fn(&mut Traversal<'_>, &Value, &mut Element, &str) -> Result<()> + Send + Sync + 'static,
    {
        self.registry.register(kinds, handler);
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Gives direct access to this encoder's registry.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Populates the tree from the structure.
    ///
    /// Call this exactly once; a second call appends the structure again.
    ///
    /// # Errors
    ///
    /// Any error aborts the whole encoding and leaves the tree partially
    /// populated; the encoder should be discarded.
    pub fn encode(&mut self) -> Result<&mut Self> {
        debug!(root = %self.root_name, "encoding structure");
        let mut engine = Traversal::new(&self.registry, &self.options);
        engine.traverse(&self.structure, &mut self.root, &self.root_name)?;
        debug!(
            root = %self.root_name,
            elements = self.root.count(),
            "encoded structure"
        );
        Ok(self)
    }

    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    #[must_use]
    pub fn structure(&self) -> &Value {
        &self.structure
    }

    #[must_use]
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Renders the document and transcodes it to the configured encoding.
    ///
    /// Characters the encoding cannot represent are written as numeric
    /// character references. UTF-16 labels produce UTF-8, as `encoding_rs`
    /// only decodes UTF-16.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEncoding`] if the encoding label is not recognized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_toxml::{Encoder, EncoderOptions};
    ///
    /// let options = EncoderOptions::new().with_encoding("latin1");
    /// let mut encoder = Encoder::with_options("root", "caf\u{e9}", options).unwrap();
    /// encoder.encode().unwrap();
    /// assert_eq!(encoder.to_bytes().unwrap(), b"<root>caf\xe9</root>");
    /// ```
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let encoding = encoding_rs::Encoding::for_label(self.options.encoding.as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(self.options.encoding.clone()))?;
        let text = self.to_string();
        let (bytes, _, _) = encoding.encode(&text);
        Ok(bytes.into_owned())
    }

    /// Writes [`to_bytes`](Encoder::to_bytes) output to `writer`.
    ///
    /// # Errors
    ///
    /// Fails on an unknown encoding or a writer error.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.to_bytes()?;
        writer
            .write_all(&bytes)
            .map_err(|e| Error::io(&e.to_string()))
    }
}

/// Renders the tree. Characters the configured encoding cannot represent
/// appear as numeric character references.
impl fmt::Display for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.root, &self.options.render_options()))
    }
}
