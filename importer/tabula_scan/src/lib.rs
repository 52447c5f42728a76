//! Low-level scanning layer for Tabula document importers.
//!
//! Format parsers (spreadsheet, markup) are all written against one
//! primitive, the [`Cursor`]: a position over an immutable byte buffer that
//! can skip runs of bytes, match literals, parse numbers, and report where
//! it is. This crate provides that primitive and nothing grammar-specific.
//!
//! ```text
//! let mut cur = Cursor::new(b"  total = 3.5;");
//! cur.skip_space_and_control();
//! if !cur.parse_expected(b"total") {
//!     return Err(cur.error("expected `total`"));
//! }
//! cur.skip(&ByteSet::new(b" ="));
//! let value = cur.parse_double().ok_or_else(|| cur.error("expected a number"))?;
//! ```
//!
//! # Fast paths
//!
//! [`Cursor::skip`] and [`Cursor::skip_space_and_control`] dominate import
//! time on large documents, so they run block-at-a-time kernels when the
//! target allows (see [`capability`]). The byte-at-a-time loops are the
//! reference: both paths yield identical positions for every input, and
//! neither reads past the end of the slice.

mod byte_set;
pub mod capability;
mod cursor;
mod kernel;
pub mod numeric;

use std::sync::Once;

pub use byte_set::{ByteSet, MAX_VECTOR_MEMBERS};
pub use capability::ScanPath;
pub use cursor::{Cursor, CursorOptions};
pub use numeric::{parse_numeric, parse_numeric_lexical, NumericParser};
pub use tabula_diagnostic::{ParseError, Result};

static TRACING_INIT: Once = Once::new();

/// Install a scanner log subscriber when `RUST_LOG` is set.
///
/// Idempotent. An importer embedded in a host that already installed a
/// global subscriber keeps the host's; scanner events then flow there.
/// Filter with `RUST_LOG=tabula_scan=debug` (scan path choice) or
/// `RUST_LOG=tabula_scan=trace,tabula_diagnostic=trace` (cursors, errors).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("RUST_LOG") else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::new(&directives))
            .try_init();
        if let Err(err) = installed {
            tracing::debug!(%err, "keeping the host's tracing subscriber");
        }
    });
}
