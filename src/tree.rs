//! In-memory element tree and its XML rendering.
//!
//! The encoder never touches [`Element`] internals directly; it creates
//! children, sets text and attributes, and asks [`render`] for the final
//! string. Every mutating operation validates its input, so a tree can never
//! hold a name or character that would make the rendered document malformed.
//!
//! ```rust
//! use serde_toxml::tree::{render, Element, RenderOptions};
//!
//! let mut root = Element::new("root").unwrap();
//! root.create_child("greeting").unwrap().set_text("hi & bye").unwrap();
//! root.set_attribute("lang", "en").unwrap();
//!
//! let xml = render(&root, &RenderOptions::default());
//! assert_eq!(xml, r#"<root lang="en"><greeting>hi &amp; bye</greeting></root>"#);
//! ```

use crate::{Error, Result};
use encoding_rs::{Encoding, GB18030, UTF_8};
use indexmap::IndexMap;
use std::fmt::Write;

/// The character content of an element.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Text {
    #[default]
    None,
    /// Escaped on output.
    Plain(String),
    /// Emitted verbatim inside `<![CDATA[...]]>`.
    CData(String),
}

/// A named XML element with attributes, optional text and ordered children.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    text: Text,
    children: Vec<Element>,
}

impl Element {
    /// Creates a childless element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `name` is not a legal element name.
    pub fn new(name: &str) -> Result<Self> {
        validate_name(name)?;
        Ok(Element {
            name: name.to_string(),
            attributes: IndexMap::new(),
            text: Text::None,
            children: Vec::new(),
        })
    }

    /// Creates an element with an initial attribute set.
    ///
    /// # Errors
    ///
    /// Fails on an invalid element name, attribute name or attribute value.
    pub fn with_attributes<'a, I>(name: &str, attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut element = Element::new(name)?;
        for (key, value) in attributes {
            element.set_attribute(key, value)?;
        }
        Ok(element)
    }

    /// Appends a new child element and returns it for population.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `name` is not a legal element name.
    pub fn create_child(&mut self, name: &str) -> Result<&mut Element> {
        let child = Element::new(name)?;
        self.children.push(child);
        let last = self.children.len() - 1;
        Ok(&mut self.children[last])
    }

    /// Sets escaped text content. Empty text clears the content, so the
    /// element still renders self-closing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalContent`] at the first character XML cannot carry.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        if let Some((offset, ch)) = find_illegal_char(text) {
            return Err(Error::illegal_content(&self.name, ch, offset));
        }
        self.text = if text.is_empty() {
            Text::None
        } else {
            Text::Plain(text.to_string())
        };
        Ok(())
    }

    /// Sets content emitted as a CDATA section, without escaping.
    pub fn set_cdata(&mut self, text: &str) {
        self.text = Text::CData(text.to_string());
    }

    /// Sets (or replaces) an attribute.
    ///
    /// # Errors
    ///
    /// Fails if the attribute name is invalid or the value holds a character
    /// XML cannot carry.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        validate_name(name)?;
        if let Some((offset, ch)) = find_illegal_char(value) {
            return Err(Error::illegal_content(&self.name, ch, offset));
        }
        self.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn content(&self) -> &Text {
        &self.text
    }

    /// Returns the text or CDATA content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.text {
            Text::None => None,
            Text::Plain(s) | Text::CData(s) => Some(s),
        }
    }

    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the first child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns `true` if the element has neither content nor children and
    /// therefore renders self-closing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && matches!(self.text, Text::None)
    }

    /// Counts this element and all of its descendants.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }
}

/// Options controlling rendering.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Encoding name written into the declaration. Characters it cannot
    /// represent are rendered as character references.
    pub encoding: String,
    /// Emit `<?xml version='1.0' encoding='...'?>` followed by a newline.
    pub xml_declaration: bool,
    /// Put element-only content on indented lines.
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            encoding: "UTF-8".to_string(),
            xml_declaration: false,
            pretty: false,
            indent: 2,
        }
    }
}

/// Renders an element tree to a string.
///
/// Text and attribute characters that `options.encoding` cannot represent
/// are written as numeric character references, so the string can be
/// transcoded to that encoding without loss. Unknown labels and Unicode
/// encodings leave characters as they are. CDATA content and names are
/// never rewritten.
#[must_use]
pub fn render(root: &Element, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(256);
    if options.xml_declaration {
        let _ = writeln!(out, "<?xml version='1.0' encoding='{}'?>", options.encoding);
    }
    let target = Encoding::for_label(options.encoding.as_bytes())
        .map(Encoding::output_encoding)
        .filter(|encoding| *encoding != UTF_8 && *encoding != GB18030);
    write_element(&mut out, root, options, target, 0);
    out
}

fn write_element(
    out: &mut String,
    element: &Element,
    options: &RenderOptions,
    target: Option<&'static Encoding>,
    depth: usize,
) {
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        write_escaped_attr(out, value, target);
        out.push('"');
    }

    if element.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');

    match &element.text {
        Text::None => {}
        Text::Plain(text) => write_escaped_text(out, text, target),
        Text::CData(text) => write_cdata(out, text),
    }

    // Mixed content is never indented.
    let indent = options.pretty && matches!(element.text, Text::None);
    for child in &element.children {
        if indent {
            out.push('\n');
            push_indent(out, options.indent * (depth + 1));
        }
        write_element(out, child, options, target, depth + 1);
    }
    if indent && !element.children.is_empty() {
        out.push('\n');
        push_indent(out, options.indent * depth);
    }

    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

fn push_indent(out: &mut String, width: usize) {
    out.extend(std::iter::repeat(' ').take(width));
}

fn is_encodable(encoding: &'static Encoding, ch: char) -> bool {
    let mut buf = [0u8; 4];
    let (_, _, had_errors) = encoding.encode(ch.encode_utf8(&mut buf));
    !had_errors
}

fn push_char(out: &mut String, ch: char, target: Option<&'static Encoding>) {
    match target {
        Some(encoding) if !ch.is_ascii() && !is_encodable(encoding, ch) => {
            let _ = write!(out, "&#{};", u32::from(ch));
        }
        _ => out.push(ch),
    }
}

fn write_escaped_text(out: &mut String, text: &str, target: Option<&'static Encoding>) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            _ => push_char(out, ch, target),
        }
    }
}

fn write_escaped_attr(out: &mut String, text: &str, target: Option<&'static Encoding>) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => push_char(out, ch, target),
        }
    }
}

/// A literal `]]>` would close the section early, so it is split across two.
fn write_cdata(out: &mut String, text: &str) {
    out.push_str("<![CDATA[");
    out.push_str(&text.replace("]]>", "]]]]><![CDATA[>"));
    out.push_str("]]>");
}

/// Returns `true` if `c` is a valid `Char` per XML 1.0 §2.2.
#[must_use]
pub fn is_xml_char(c: char) -> bool {
    matches!(c as u32,
        0x09 | 0x0A | 0x0D | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x0001_0000..=0x0010_FFFF
    )
}

/// Finds the first character that XML 1.0 cannot carry, with its byte offset.
#[must_use]
pub fn find_illegal_char(text: &str) -> Option<(usize, char)> {
    text.char_indices().find(|(_, c)| !is_xml_char(*c))
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z' | '_' | 'a'..='z' |
        '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}' |
        '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' |
        '\u{200C}'..='\u{200D}' | '\u{2070}'..='\u{218F}' |
        '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}' |
        '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' |
        '\u{10000}'..='\u{EFFFF}'
    )
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' |
            '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}'
        )
}

/// Checks that `name` can be used as an element or attribute name.
///
/// Names are XML 1.0 names without namespace prefixes: a letter or
/// underscore followed by letters, digits, `-`, `.` or `_`.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] describing the first problem found.
pub fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let first = chars
        .next()
        .ok_or_else(|| Error::invalid_name(name, "name is empty"))?;
    if !is_name_start_char(first) {
        return Err(Error::invalid_name(
            name,
            &format!("{:?} cannot start a name", first),
        ));
    }
    if let Some(bad) = chars.find(|c| !is_name_char(*c)) {
        return Err(Error::invalid_name(
            name,
            &format!("{:?} is not allowed in a name", bad),
        ));
    }
    Ok(())
}
