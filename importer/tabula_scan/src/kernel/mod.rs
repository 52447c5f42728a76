//! Scanning kernels: count the leading run of bytes matching a class.
//!
//! Each kernel has a scalar reference and a block-at-a-time version. Both
//! take the unread tail of the input as a slice and return the length of
//! the matching prefix, so the cursor only ever adds the result to its
//! position. Block versions only load full blocks that lie inside the
//! slice and finish the tail with the scalar loop; no padding past the
//! logical end of the input is ever read.
//!
//! | target | skip set | space and control |
//! |---|---|---|
//! | `x86_64` | SSE2, 16-byte blocks | AVX2 32-byte blocks when available, else SSE2 |
//! | other 64-bit | SWAR, 8-byte words | SWAR, 8-byte words |
//! | other 32-bit | scalar | scalar |

use crate::ByteSet;

#[cfg_attr(
    any(target_arch = "x86_64", not(target_pointer_width = "64")),
    allow(
        dead_code,
        reason = "portable kernels are still checked against scalar by the tests"
    )
)]
mod swar;
#[cfg(target_arch = "x86_64")]
mod x86;

/// Length of the prefix of `buf` whose bytes are all in `set`.
#[inline]
pub(crate) fn skip_in_set_scalar(buf: &[u8], set: &ByteSet) -> usize {
    buf.iter().take_while(|&&b| set.contains(b)).count()
}

/// Length of the prefix of `buf` whose bytes are all `<= 0x20`.
#[inline]
pub(crate) fn skip_space_and_control_scalar(buf: &[u8]) -> usize {
    buf.iter().take_while(|&&b| b <= b' ').count()
}

/// Block version of [`skip_in_set_scalar`].
///
/// Sets too large for per-member comparison, and the empty set, take the
/// scalar loop directly.
pub(crate) fn skip_in_set_vectorized(buf: &[u8], set: &ByteSet) -> usize {
    #[cfg(target_arch = "x86_64")]
    {
        match set.vector_members() {
            Some(members) if !members.is_empty() => x86::skip_in_set_sse2(buf, set, members),
            _ => skip_in_set_scalar(buf, set),
        }
    }
    #[cfg(all(not(target_arch = "x86_64"), target_pointer_width = "64"))]
    {
        match set.vector_members() {
            Some(members) if !members.is_empty() => swar::skip_in_set(buf, set, members),
            _ => skip_in_set_scalar(buf, set),
        }
    }
    #[cfg(all(not(target_arch = "x86_64"), not(target_pointer_width = "64")))]
    {
        skip_in_set_scalar(buf, set)
    }
}

/// Block version of [`skip_space_and_control_scalar`].
pub(crate) fn skip_space_and_control_vectorized(buf: &[u8]) -> usize {
    #[cfg(target_arch = "x86_64")]
    {
        x86::skip_space_and_control_avx2_checked(buf)
    }
    #[cfg(all(not(target_arch = "x86_64"), target_pointer_width = "64"))]
    {
        swar::skip_space_and_control(buf)
    }
    #[cfg(all(not(target_arch = "x86_64"), not(target_pointer_width = "64")))]
    {
        skip_space_and_control_scalar(buf)
    }
}
