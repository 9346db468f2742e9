//! # serde_toxml
//!
//! Converts nested data (mappings, sequences, scalars and Serde types) into an
//! XML element tree and renders it as text.
//!
//! ## Mapping rules
//!
//! - A mapping becomes one child element per key, in insertion order.
//! - A sequence becomes one child per item. Item elements are named by a
//!   [`Pluralizer`] from the name of the field holding the sequence; the
//!   default names every item `item`.
//! - Booleans render as `true`/`false`, numbers in decimal, strings verbatim
//!   (escaped on output).
//! - [`Attributes`] adds attributes to the element it lands in; [`CData`]
//!   emits a CDATA section.
//!
//! Which function encodes which kind of value is decided by a per-encoder
//! [`Registry`]. Types with no registered handler can still take part by
//! implementing [`ToXml`].
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_toxml::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let user = User {
//!     id: 7,
//!     name: "Alice".to_string(),
//!     tags: vec!["admin".to_string()],
//! };
//!
//! assert_eq!(
//!     to_string("user", &user).unwrap(),
//!     "<user><id>7</id><name>Alice</name><tags><item>admin</item></tags></user>"
//! );
//! ```
//!
//! ### Building values with `xml!`
//!
//! ```rust
//! use serde_toxml::{xml, Encoder};
//!
//! let mut encoder = Encoder::new("a", xml!({"b": [1, 2.5, true]})).unwrap();
//! encoder.encode().unwrap();
//! assert_eq!(
//!     encoder.to_string(),
//!     "<a><b><item>1</item><item>2.5</item><item>true</item></b></a>"
//! );
//! ```
//!
//! ### Custom handlers
//!
//! ```rust
//! use serde_toxml::{xml, Encoder, Kind};
//!
//! let mut encoder = Encoder::new("a", xml!({"flag": true})).unwrap();
//! encoder.register(Kind::Bool, |engine, value, element, _name| {
//!     let yes = value.as_bool() == Some(true);
//!     engine.text(element, if yes { "yes" } else { "no" })
//! });
//! encoder.encode().unwrap();
//! assert_eq!(encoder.to_string(), "<a><flag>yes</flag></a>");
//! ```
//!
//! ## Logging
//!
//! Encoding emits `tracing` events: a `debug` event when each
//! [`Encoder::encode`] call starts and ends, and a `trace` event per dispatch. Install any
//! `tracing` subscriber to see them.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - serializing a struct in one call
//! - **`macro.rs`** - building values with the `xml!` macro
//! - **`custom_types.rs`** - `ToXml` implementations and registry overrides
//! - **`custom_options.rs`** - pluralizers, declarations, encodings, pretty output
//!
//! Run any example with: `cargo run --example <name>`

pub mod encoder;
pub mod engine;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod pluralize;
pub mod protocol;
pub mod registry;
pub mod ser;
pub mod tree;
pub mod value;

pub use encoder::Encoder;
pub use engine::Traversal;
pub use error::{Error, Result};
pub use map::XmlMap;
pub use options::{EncoderOptions, IllegalChars};
pub use pluralize::Pluralizer;
pub use protocol::{Attributes, CData, ToXml};
pub use registry::{handlers, Handler, KindSet, Registry};
pub use ser::{to_value, ValueSerializer};
pub use tree::Element;
pub use value::{Kind, Number, Opaque, Value};

use serde::Serialize;
use std::io;

fn encode_with<T>(root: &str, value: &T, options: EncoderOptions) -> Result<Encoder>
where
    T: ?Sized + Serialize,
{
    let mut encoder = Encoder::with_options(root, to_value(value)?, options)?;
    encoder.encode()?;
    Ok(encoder)
}

/// Serialize any `T: Serialize` to an XML string under a `root` element.
///
/// # Examples
///
/// ```rust
/// use serde_toxml::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let xml = to_string("point", &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(xml, "<point><x>1</x><y>2</y></point>");
/// ```
///
/// # Errors
///
/// Returns an error if `root` or a key is not a valid element name, a value
/// has no handler, or a string holds characters XML cannot represent.
/// Values holding [`ToXml`] implementors cannot pass through Serde; build an
/// [`Encoder`] for those.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(root: &str, value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(root, value, EncoderOptions::default())
}

/// Serialize any `T: Serialize` to an indented XML string.
///
/// # Examples
///
/// ```rust
/// use serde_toxml::{to_string_pretty, xml};
///
/// let xml = to_string_pretty("a", &xml!({"b": {"c": 1}})).unwrap();
/// assert_eq!(xml, "<a>\n  <b>\n    <c>1</c>\n  </b>\n</a>");
/// ```
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(root: &str, value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(root, value, EncoderOptions::pretty())
}

/// Serialize any `T: Serialize` to an XML string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_toxml::{to_string_with_options, EncoderOptions};
///
/// let options = EncoderOptions::new().with_xml_declaration(true);
/// let xml = to_string_with_options("n", &5, options).unwrap();
/// assert_eq!(xml, "<?xml version='1.0' encoding='UTF-8'?>\n<n>5</n>");
/// ```
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(root: &str, value: &T, options: EncoderOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(encode_with(root, value, options)?.to_string())
}

/// Serialize any `T: Serialize` to bytes in the configured encoding.
///
/// # Examples
///
/// ```rust
/// use serde_toxml::{to_vec, EncoderOptions};
///
/// let options = EncoderOptions::new().with_encoding("ISO-8859-1");
/// assert_eq!(to_vec("n", "\u{e9}", options).unwrap(), b"<n>\xe9</n>");
/// ```
///
/// # Errors
///
/// Same as [`to_string`], plus [`Error::UnknownEncoding`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(root: &str, value: &T, options: EncoderOptions) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    encode_with(root, value, options)?.to_bytes()
}

/// Serialize any `T: Serialize` as XML into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_toxml::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, "list", &vec!["a", "b"]).unwrap();
/// assert_eq!(buffer, b"<list><item>a</item><item>b</item></list>");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, root: &str, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, root, value, EncoderOptions::default())
}

/// Serialize any `T: Serialize` as XML into a writer with custom options.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(
    writer: W,
    root: &str,
    value: &T,
    options: EncoderOptions,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    encode_with(root, value, options)?.write_to(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    fn user() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        }
    }

    #[test]
    fn test_serialize_user() {
        assert_eq!(
            to_string("user", &user()).unwrap(),
            "<user><id>123</id><name>Alice</name><active>true</active>\
             <tags><item>admin</item><item>user</item></tags></user>"
        );
    }

    #[test]
    fn test_pretty_printing() {
        let xml = to_string_pretty("user", &user()).unwrap();
        assert!(xml.starts_with("<user>\n  <id>123</id>\n"));
        assert!(xml.contains("    <item>admin</item>\n"));
        assert!(xml.ends_with("  </tags>\n</user>"));
    }

    #[test]
    fn test_sorted_map() {
        let mut map = BTreeMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        assert_eq!(to_string("m", &map).unwrap(), "<m><a>1</a><b>2</b></m>");
    }

    #[test]
    fn test_custom_options() {
        let options = EncoderOptions::new()
            .with_pluralizer(Pluralizer::mapping([("tags", "tag")]))
            .with_root_attribute("version", "2");
        let xml = to_string_with_options("user", &user(), options).unwrap();
        assert!(xml.starts_with(r#"<user version="2">"#));
        assert!(xml.contains("<tags><tag>admin</tag><tag>user</tag></tags>"));
    }

    #[test]
    fn test_invalid_root() {
        assert!(matches!(
            to_string("1root", &user()),
            Err(Error::InvalidName { .. })
        ));
    }

    #[test]
    fn test_custom_values_need_an_encoder() {
        let value = Value::from(CData::new("x"));
        assert!(matches!(to_string("a", &value), Err(Error::Custom(_))));
    }

    #[test]
    fn test_to_writer() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, "n", &1).unwrap();
        assert_eq!(buffer, b"<n>1</n>");
    }
}
