//! Configuration options for the encoder.
//!
//! This module provides:
//!
//! - [`EncoderOptions`]: main configuration struct
//! - [`IllegalChars`]: what to do with text characters XML cannot represent
//!
//! ## Examples
//!
//! ```rust
//! use serde_toxml::{xml, to_string_with_options, EncoderOptions};
//!
//! let options = EncoderOptions::new()
//!     .with_xml_declaration(true)
//!     .with_root_attribute("version", "2");
//! let out = to_string_with_options("root", &xml!({"a": 1}), options).unwrap();
//! assert_eq!(
//!     out,
//!     "<?xml version='1.0' encoding='UTF-8'?>\n<root version=\"2\"><a>1</a></root>"
//! );
//! ```

use crate::tree::{is_xml_char, RenderOptions};
use crate::Pluralizer;
use indexmap::IndexMap;
use std::borrow::Cow;

/// Policy for text containing characters that XML 1.0 cannot carry
/// (C0 controls other than tab, newline and carriage return, U+FFFE, U+FFFF).
///
/// # Examples
///
/// ```rust
/// use serde_toxml::IllegalChars;
///
/// let policy = IllegalChars::escape();
/// assert_eq!(policy.clean("a\u{1A}b"), "ab");
///
/// let policy = IllegalChars::replace_with("?");
/// assert_eq!(policy.clean("a\u{0}b"), "a?b");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum IllegalChars {
    /// Reject the text with [`Error::IllegalContent`](crate::Error::IllegalContent).
    #[default]
    Strict,
    /// Replace every illegal character before it reaches the tree.
    Escape { replacement: String },
}

impl IllegalChars {
    /// Strips illegal characters.
    #[must_use]
    pub fn escape() -> Self {
        IllegalChars::Escape {
            replacement: String::new(),
        }
    }

    #[must_use]
    pub fn replace_with(replacement: &str) -> Self {
        IllegalChars::Escape {
            replacement: replacement.to_string(),
        }
    }

    /// Applies the policy's substitution. Strict leaves text untouched.
    #[must_use]
    pub fn clean<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            IllegalChars::Strict => Cow::Borrowed(text),
            IllegalChars::Escape { replacement } => {
                if text.chars().all(is_xml_char) {
                    return Cow::Borrowed(text);
                }
                let mut cleaned = String::with_capacity(text.len());
                for ch in text.chars() {
                    if is_xml_char(ch) {
                        cleaned.push(ch);
                    } else {
                        cleaned.push_str(replacement);
                    }
                }
                Cow::Owned(cleaned)
            }
        }
    }
}

/// Configuration options for [`Encoder`](crate::Encoder).
///
/// # Examples
///
/// ```rust
/// use serde_toxml::{EncoderOptions, IllegalChars, Pluralizer};
///
/// // Defaults: UTF-8, no declaration, strict text, items named "item"
/// let options = EncoderOptions::new();
/// assert_eq!(options.encoding, "UTF-8");
/// assert!(!options.xml_declaration);
///
/// let options = EncoderOptions::pretty()
///     .with_encoding("latin1")
///     .with_illegal_chars(IllegalChars::escape())
///     .with_pluralizer(Pluralizer::constant("entry"))
///     .with_indent(4);
/// ```
#[derive(Clone, Debug)]
pub struct EncoderOptions {
    pub encoding: String,
    pub xml_declaration: bool,
    pub root_attributes: IndexMap<String, String>,
    pub illegal_chars: IllegalChars,
    pub pluralizer: Pluralizer,
    pub max_depth: usize,
    pub pretty: bool,
    pub indent: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        EncoderOptions {
            encoding: "UTF-8".to_string(),
            xml_declaration: false,
            root_attributes: IndexMap::new(),
            illegal_chars: IllegalChars::default(),
            pluralizer: Pluralizer::default(),
            max_depth: 128,
            pretty: false,
            indent: 2,
        }
    }
}

impl EncoderOptions {
    /// Creates default options (compact output, UTF-8, no declaration).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for indented output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_toxml::EncoderOptions;
    ///
    /// let options = EncoderOptions::pretty();
    /// assert!(options.pretty);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        EncoderOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the encoding named in the declaration and used by
    /// [`Encoder::to_bytes`](crate::Encoder::to_bytes).
    #[must_use]
    pub fn with_encoding(mut self, encoding: &str) -> Self {
        self.encoding = encoding.to_string();
        self
    }

    #[must_use]
    pub fn with_xml_declaration(mut self, xml_declaration: bool) -> Self {
        self.xml_declaration = xml_declaration;
        self
    }

    #[must_use]
    pub fn with_root_attribute(mut self, name: &str, value: &str) -> Self {
        self.root_attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_root_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.root_attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use]
    pub fn with_illegal_chars(mut self, policy: IllegalChars) -> Self {
        self.illegal_chars = policy;
        self
    }

    /// Shorthand for `with_illegal_chars(IllegalChars::escape())`.
    #[must_use]
    pub fn escape_illegal_chars(self) -> Self {
        self.with_illegal_chars(IllegalChars::escape())
    }

    #[must_use]
    pub fn with_pluralizer(mut self, pluralizer: Pluralizer) -> Self {
        self.pluralizer = pluralizer;
        self
    }

    /// Sets the maximum number of nested value levels, counting the root value.
    ///
    /// Default is 128.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the indentation width. Only affects pretty output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub(crate) fn render_options(&self) -> RenderOptions {
        RenderOptions {
            encoding: self.encoding.clone(),
            xml_declaration: self.xml_declaration,
            pretty: self.pretty,
            indent: self.indent,
        }
    }
}
