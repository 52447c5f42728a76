//! Byte cursor over a borrowed, immutable input buffer.
//!
//! The cursor tracks three positions: the start of the buffer, the current
//! byte, and one past the last byte. Start and end never change; the
//! current position only moves forward, except through [`Cursor::prev`].
//!
//! Every read is bounds-checked against the slice, so the cursor never
//! depends on padding after the logical end of the input. Skip operations
//! dispatch to block kernels or scalar loops according to the cursor's
//! [`ScanPath`]; the resulting position is the same either way.
//!
//! Operations that can fail locally report it in their return value
//! (`bool` for [`Cursor::parse_expected`], `Option` for
//! [`Cursor::parse_double`]) and leave the position untouched. Grammar
//! errors are the caller's business; [`Cursor::error`] builds one at the
//! current offset.

use tabula_diagnostic::ParseError;

use crate::capability::ScanPath;
use crate::kernel;
use crate::numeric::{parse_numeric, NumericParser};
use crate::ByteSet;

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Construction options for [`Cursor`].
#[derive(Clone, Copy, Debug)]
pub struct CursorOptions {
    /// The buffer is transient: the caller may not hold on to slices of it
    /// after the parsing pass. Advisory only; the cursor behaves the same.
    pub transient: bool,
    /// Strategy used by [`Cursor::parse_double`].
    pub numeric: NumericParser,
    /// Scan path; `None` uses [`ScanPath::detect`].
    pub path: Option<ScanPath>,
}

impl Default for CursorOptions {
    fn default() -> Self {
        CursorOptions {
            transient: false,
            numeric: parse_numeric,
            path: None,
        }
    }
}

impl CursorOptions {
    #[must_use]
    pub fn transient(mut self, transient: bool) -> Self {
        self.transient = transient;
        self
    }

    #[must_use]
    pub fn numeric(mut self, numeric: NumericParser) -> Self {
        self.numeric = numeric;
        self
    }

    #[must_use]
    pub fn path(mut self, path: ScanPath) -> Self {
        self.path = Some(path);
        self
    }
}

/// Cursor over `buf`, positioned at `pos`.
///
/// The cursor is [`Copy`], so a saved copy doubles as a checkpoint for
/// backtracking. Copies are independent; nothing is shared between them.
///
/// # Invariant
///
/// `pos <= buf.len()` at all times.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    transient: bool,
    numeric: NumericParser,
    path: ScanPath,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf` with default options.
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_options(buf, CursorOptions::default())
    }

    /// Create a cursor at the start of `buf`.
    pub fn with_options(buf: &'a [u8], options: CursorOptions) -> Self {
        let path = options.path.unwrap_or_else(ScanPath::detect);
        tracing::trace!(
            len = buf.len(),
            transient = options.transient,
            ?path,
            "cursor created"
        );
        Cursor {
            buf,
            pos: 0,
            transient: options.transient,
            numeric: options.numeric,
            path,
        }
    }

    // === Sizes and positions ===

    /// Bytes from the current position to the end, the current byte included.
    #[inline]
    pub fn available_size(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Bytes after the current one: `available_size() - 1`, or `0` when the
    /// cursor is exhausted.
    #[inline]
    pub fn remaining_size(&self) -> usize {
        self.available_size().saturating_sub(1)
    }

    /// Byte distance from the start of the buffer to the current position.
    #[inline]
    #[allow(
        clippy::cast_possible_wrap,
        reason = "slice lengths never exceed isize::MAX"
    )]
    pub fn offset(&self) -> isize {
        self.pos as isize
    }

    /// Current position as an index into the buffer.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unread part of the buffer.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// The whole buffer the cursor was built over.
    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    // === Single-byte movement ===

    /// Returns `true` while the current position is before the end.
    #[inline]
    pub fn has_char(&self) -> bool {
        self.pos < self.buf.len()
    }

    /// Returns `true` if there is a byte after the current one.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.pos + 1 < self.buf.len()
    }

    /// The byte at the current position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted. Check [`has_char`](Self::has_char)
    /// first, or use [`peek_char(0)`](Self::peek_char).
    #[inline]
    pub fn cur_char(&self) -> u8 {
        self.buf[self.pos]
    }

    /// The byte one past the current position, if any.
    #[inline]
    pub fn next_char(&self) -> Option<u8> {
        self.peek_char(1)
    }

    /// The byte `offset` bytes past the current position, if any.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<u8> {
        self.buf.get(self.pos.checked_add(offset)?).copied()
    }

    /// The next `len` bytes starting at the current position, without
    /// moving. `None` if fewer than `len` bytes are available.
    #[inline]
    pub fn peek_chars(&self, len: usize) -> Option<&'a [u8]> {
        self.rest().get(..len)
    }

    /// Advance by one byte. No-op once exhausted.
    #[inline]
    pub fn next(&mut self) {
        self.next_n(1);
    }

    /// Advance by `n` bytes, stopping at the end.
    #[inline]
    pub fn next_n(&mut self, n: usize) {
        self.pos += n.min(self.available_size());
    }

    /// Rewind by `n` bytes.
    ///
    /// The caller must not rewind past the start; this is checked in debug
    /// builds and clamped in release builds.
    #[inline]
    pub fn prev(&mut self, n: usize) {
        debug_assert!(
            n <= self.pos,
            "rewind by {n} from {} moves before start",
            self.pos
        );
        self.pos = self.pos.saturating_sub(n);
    }

    // === Runs ===

    /// Advance past the longest run of bytes in `set`.
    ///
    /// Returns the number of bytes skipped.
    #[inline]
    pub fn skip(&mut self, set: &ByteSet) -> usize {
        let rest = self.rest();
        let n = match self.path {
            ScanPath::Scalar => kernel::skip_in_set_scalar(rest, set),
            ScanPath::Vectorized => kernel::skip_in_set_vectorized(rest, set),
        };
        self.pos += n;
        n
    }

    /// Advance past the longest run of bytes `<= 0x20`: ASCII control
    /// characters and space.
    ///
    /// Returns the number of bytes skipped.
    #[inline]
    pub fn skip_space_and_control(&mut self) -> usize {
        let rest = self.rest();
        let n = match self.path {
            ScanPath::Scalar => kernel::skip_space_and_control_scalar(rest),
            ScanPath::Vectorized => kernel::skip_space_and_control_vectorized(rest),
        };
        self.pos += n;
        n
    }

    /// Advance to the next occurrence of `byte`.
    ///
    /// Returns `true` with the cursor on the byte if it was found; otherwise
    /// moves to the end and returns `false`.
    pub fn skip_to(&mut self, byte: u8) -> bool {
        match memchr::memchr(byte, self.rest()) {
            Some(found) => {
                self.pos += found;
                true
            }
            None => {
                self.pos = self.buf.len();
                false
            }
        }
    }

    /// Skip a UTF-8 byte order mark at the current position, if present.
    pub fn skip_bom(&mut self) -> bool {
        self.parse_expected(UTF8_BOM)
    }

    // === Tokens ===

    /// Match `expected` at the current position, all or nothing.
    ///
    /// On a full match the cursor moves past the literal and `true` is
    /// returned. Otherwise, including when fewer bytes remain than the
    /// literal is long, the cursor does not move.
    #[inline]
    pub fn parse_expected(&mut self, expected: &[u8]) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    /// Parse a floating-point literal at the current position with the
    /// bound numeric strategy.
    ///
    /// Returns `None` without moving when the strategy consumes nothing.
    /// Otherwise the cursor advances by exactly the bytes consumed.
    pub fn parse_double(&mut self) -> Option<f64> {
        let rest = self.rest();
        let (value, consumed) = (self.numeric)(rest);
        if consumed == 0 {
            return None;
        }
        debug_assert!(
            consumed <= rest.len(),
            "numeric strategy consumed {consumed} of {} bytes",
            rest.len()
        );
        self.pos += consumed.min(rest.len());
        Some(value)
    }

    // === Configuration ===

    /// Whether the caller marked the buffer as transient.
    pub fn is_transient(&self) -> bool {
        self.transient
    }

    pub fn numeric_parser(&self) -> NumericParser {
        self.numeric
    }

    /// Swap the numeric strategy for subsequent [`parse_double`](Self::parse_double) calls.
    pub fn set_numeric_parser(&mut self, numeric: NumericParser) {
        self.numeric = numeric;
    }

    pub fn scan_path(&self) -> ScanPath {
        self.path
    }

    // === Errors ===

    /// A [`ParseError`] at the current offset.
    pub fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.offset())
    }

    /// A classified [`ParseError`] at the current offset.
    pub fn error_with_class(
        &self,
        class: impl Into<String>,
        message: impl Into<String>,
    ) -> ParseError {
        ParseError::with_class(class, message, self.offset())
    }
}
