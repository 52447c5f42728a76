//! Parse errors for Tabula document importers.
//!
//! Every layer above the scanner reports grammar violations the same way:
//! a human-readable message plus the byte offset at which the problem was
//! detected. The offset is baked into the message once, at construction,
//! so callers can print [`ParseError`] directly without re-formatting.
//!
//! ```text
//! let err = ParseError::new("unexpected token", 42);
//! assert_eq!(err.to_string(), "unexpected token (offset=42)");
//! ```
//!
//! Local no-match outcomes (a literal that is not there, a number that does
//! not parse) are not errors at this level; the scanner reports them as
//! `bool`/`Option` and the grammar decides when they become fatal.

mod parse_error;

pub use parse_error::{build_message_char, build_message_span, ParseError};

/// Result type for importer operations that fail with a [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
