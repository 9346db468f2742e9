//! Error types for XML encoding.
//!
//! Every failure is fatal to the in-progress [`Encoder::encode`](crate::Encoder::encode)
//! call and is surfaced as a distinct, inspectable variant.
//!
//! ## Error Categories
//!
//! - **Invalid names**: a root name or a mapping key is not a legal element name
//! - **Unknown types**: a value has neither a registered handler nor a `ToXml` impl
//! - **Illegal content**: text carries characters XML 1.0 cannot represent
//! - **Limits**: the structure nests deeper than the configured depth limit
//!
//! ## Examples
//!
//! ```rust
//! use serde_toxml::{Encoder, Error};
//!
//! let err = Encoder::new("a<root>element", serde_toxml::xml!({})).unwrap_err();
//! assert!(matches!(err, Error::InvalidName { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while building or rendering XML.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An element or attribute name violates XML name rules.
    #[error("Invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// A value has no registry entry and no custom serialization.
    #[error("Don't know how to serialise {kind}")]
    UnknownType { kind: String },

    /// Text contains a character that is not allowed in XML.
    #[error("Illegal character U+{:04X} at offset {offset} in text for <{element}>", code_point(.ch))]
    IllegalContent {
        element: String,
        ch: char,
        offset: usize,
    },

    /// The mapping pluralizer has no entry for a sequence's parent name.
    #[error("No plural element name configured for {0:?}")]
    UnknownPlural(String),

    /// Nesting went past the configured depth limit.
    #[error("Maximum nesting depth of {limit} exceeded at <{element}>")]
    DepthLimitExceeded { limit: usize, element: String },

    /// The configured output encoding is not a known label.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid-name error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_toxml::Error;
    ///
    /// let err = Error::invalid_name("a b", "contains whitespace");
    /// assert!(err.to_string().contains("whitespace"));
    /// ```
    pub fn invalid_name(name: &str, reason: &str) -> Self {
        Error::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an unknown-type error naming the offending kind.
    pub fn unknown_type<T: fmt::Display>(kind: T) -> Self {
        Error::UnknownType {
            kind: kind.to_string(),
        }
    }

    pub fn illegal_content(element: &str, ch: char, offset: usize) -> Self {
        Error::IllegalContent {
            element: element.to_string(),
            ch,
            offset,
        }
    }

    pub fn unknown_plural(name: &str) -> Self {
        Error::UnknownPlural(name.to_string())
    }

    pub fn depth_limit(limit: usize, element: &str) -> Self {
        Error::DepthLimitExceeded {
            limit,
            element: element.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_toxml::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

fn code_point(ch: &char) -> u32 {
    u32::from(*ch)
}

pub type Result<T> = std::result::Result<T, Error>;
