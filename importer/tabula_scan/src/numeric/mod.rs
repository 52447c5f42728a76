//! Numeric-literal strategies for [`Cursor::parse_double`](crate::Cursor::parse_double).
//!
//! A strategy is a plain function: it looks at the start of a byte view,
//! parses one floating-point literal, and returns the value together with
//! the number of bytes the literal occupied. Consuming zero bytes means no
//! literal was found; the value is then meaningless.
//!
//! Being `fn` pointers, strategies cannot capture state, so binding one to
//! many cursors on many threads is always safe.
//!
//! Both built-in strategies accept decimal literals only: an optional sign
//! followed by a digit or a `.`. Spellings like `inf` or `nan` are rejected
//! up front, so a successful parse never yields a NaN.

/// Strategy signature: `(value, bytes consumed)`, `0` consumed on failure.
pub type NumericParser = fn(&[u8]) -> (f64, usize);

const NO_LITERAL: (f64, usize) = (0.0, 0);

/// Returns `true` if `input` could start a decimal literal.
#[inline]
fn starts_decimal(input: &[u8]) -> bool {
    let body = match input {
        [b'+' | b'-', rest @ ..] => rest,
        _ => input,
    };
    matches!(body.first(), Some(b) if b.is_ascii_digit() || *b == b'.')
}

/// Default strategy, backed by `fast-float`.
#[inline]
pub fn parse_numeric(input: &[u8]) -> (f64, usize) {
    if !starts_decimal(input) {
        return NO_LITERAL;
    }
    match fast_float::parse_partial::<f64, _>(input) {
        Ok((value, consumed)) => (value, consumed),
        Err(_) => NO_LITERAL,
    }
}

/// Length of the sign, digits and dots before any exponent marker.
fn mantissa_len(input: &[u8]) -> usize {
    let sign = usize::from(matches!(input.first(), Some(b'+' | b'-')));
    sign + input[sign..]
        .iter()
        .take_while(|&&b| b.is_ascii_digit() || b == b'.')
        .count()
}

/// Alternate strategy, backed by `lexical-core`.
///
/// `lexical-core` rejects a literal whose exponent is incomplete (`2e`,
/// `1.5E+`, `2em`) outright. The mantissa alone is still a literal, so it
/// is reparsed on its own and the marker is left unconsumed, matching
/// [`parse_numeric`].
#[inline]
pub fn parse_numeric_lexical(input: &[u8]) -> (f64, usize) {
    if !starts_decimal(input) {
        return NO_LITERAL;
    }
    match lexical_core::parse_partial::<f64>(input) {
        Ok((value, consumed)) => (value, consumed),
        Err(_) => {
            let mantissa = mantissa_len(input);
            if matches!(input.get(mantissa), Some(b'e' | b'E')) {
                lexical_core::parse_partial::<f64>(&input[..mantissa]).unwrap_or(NO_LITERAL)
            } else {
                NO_LITERAL
            }
        }
    }
}

#[cfg(test)]
mod tests;
