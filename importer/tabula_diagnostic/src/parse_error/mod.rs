//! The offset-carrying [`ParseError`] and its message builders.

use std::fmt::Write as _;

use thiserror::Error;

/// A grammar violation detected at a byte offset into the input.
///
/// The stored message is the rendered form: `"<message> (offset=<N>)"`, or
/// `"<class>: <message> (offset=<N>)"` when a class is given. The suffix is
/// appended exactly once, in the constructor; nothing mutates the error
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "WireParseError", from = "WireParseError")
)]
#[error("{message}")]
pub struct ParseError {
    /// Optional category, e.g. the name of the format parser that failed.
    class: Option<String>,
    /// Rendered message, offset suffix included.
    message: String,
    /// Byte offset from the start of the input, or [`Self::UNKNOWN_OFFSET`].
    offset: isize,
}

impl ParseError {
    /// Offset value for errors raised without a position.
    pub const UNKNOWN_OFFSET: isize = -1;

    /// Create an error with a plain message.
    pub fn new(message: impl Into<String>, offset: isize) -> Self {
        Self::build(None, message.into(), offset)
    }

    /// Create an error with a classification prefix.
    pub fn with_class(class: impl Into<String>, message: impl Into<String>, offset: isize) -> Self {
        let class = class.into();
        let message = format!("{class}: {}", message.into());
        Self::build(Some(class), message, offset)
    }

    fn build(class: Option<String>, mut message: String, offset: isize) -> Self {
        // Writing into a String cannot fail.
        let _ = write!(message, " (offset={offset})");
        tracing::trace!(offset, class = class.as_deref(), "parse error raised");
        ParseError {
            class,
            message,
            offset,
        }
    }

    /// The rendered message, including the offset suffix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The classification, if the error was built with one.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Byte offset at which the error was detected.
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Returns `false` for errors built with [`Self::UNKNOWN_OFFSET`].
    pub fn has_offset(&self) -> bool {
        self.offset >= 0
    }

    /// The message as passed to the constructor, without class prefix or
    /// offset suffix.
    pub fn detail(&self) -> &str {
        let suffix = format!(" (offset={})", self.offset);
        let body = self
            .message
            .strip_suffix(suffix.as_str())
            .unwrap_or(&self.message);
        match &self.class {
            Some(class) => body
                .strip_prefix(class.as_str())
                .and_then(|rest| rest.strip_prefix(": "))
                .unwrap_or(body),
            None => body,
        }
    }
}

/// Serialized form: the constructor inputs, not the rendered message.
/// Deserializing goes back through the constructors, so the suffix is
/// never duplicated or lost.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct WireParseError {
    class: Option<String>,
    message: String,
    offset: isize,
}

#[cfg(feature = "serde")]
impl From<ParseError> for WireParseError {
    fn from(err: ParseError) -> Self {
        WireParseError {
            message: err.detail().to_owned(),
            class: err.class,
            offset: err.offset,
        }
    }
}

#[cfg(feature = "serde")]
impl From<WireParseError> for ParseError {
    fn from(wire: WireParseError) -> Self {
        match wire.class {
            Some(class) => ParseError::with_class(class, wire.message, wire.offset),
            None => ParseError::new(wire.message, wire.offset),
        }
    }
}

/// Compose `"<before><c><after>"` for "unexpected character" style messages.
///
/// Empty fragments are simply omitted. The byte is rendered as the Unicode
/// scalar with the same value, so ASCII input reads naturally.
pub fn build_message_char(before: &str, c: u8, after: &str) -> String {
    let mut msg = String::with_capacity(before.len() + after.len() + 1);
    msg.push_str(before);
    msg.push(char::from(c));
    msg.push_str(after);
    msg
}

/// Compose `"<before><span><after>"` for "unexpected token" style messages.
///
/// Invalid UTF-8 in `span` is rendered with replacement characters.
pub fn build_message_span(before: &str, span: &[u8], after: &str) -> String {
    let span = String::from_utf8_lossy(span);
    let mut msg = String::with_capacity(before.len() + span.len() + after.len());
    msg.push_str(before);
    msg.push_str(&span);
    msg.push_str(after);
    msg
}
