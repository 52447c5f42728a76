//! `x86_64` kernels. SSE2 is part of the target baseline; AVX2 is only
//! entered after runtime detection (see [`crate::capability`]).
//!
//! A block's compare result is turned into a bit mask with `movemask`, bit
//! `k` set when byte `k` matches. The run ends at the first clear bit.

#![allow(
    unsafe_code,
    reason = "unaligned SIMD loads of blocks that lie entirely inside the slice"
)]

use std::arch::x86_64::{
    __m128i, __m256i, _mm256_cmpeq_epi8, _mm256_loadu_si256, _mm256_min_epu8,
    _mm256_movemask_epi8, _mm256_set1_epi8, _mm_cmpeq_epi8, _mm_loadu_si128, _mm_min_epu8,
    _mm_movemask_epi8, _mm_or_si128, _mm_set1_epi8, _mm_setzero_si128,
};

use super::{skip_in_set_scalar, skip_space_and_control_scalar};
use crate::ByteSet;

const SSE_BLOCK: usize = 16;
const SSE_ALL: u32 = 0xFFFF;
const AVX_BLOCK: usize = 32;

#[inline]
fn first_clear(mask: u32) -> usize {
    (!mask).trailing_zeros() as usize
}

#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    reason = "intrinsics take and return signed lanes; only the bit pattern matters"
)]
pub(super) fn skip_in_set_sse2(buf: &[u8], set: &ByteSet, members: &[u8]) -> usize {
    let mut i = 0;
    for block in buf.chunks_exact(SSE_BLOCK) {
        // SAFETY: `block` is exactly 16 readable bytes and SSE2 is always
        // available on x86_64.
        let hits = unsafe {
            let chars = _mm_loadu_si128(block.as_ptr().cast::<__m128i>());
            let mut acc = _mm_setzero_si128();
            for &m in members {
                acc = _mm_or_si128(acc, _mm_cmpeq_epi8(chars, _mm_set1_epi8(m as i8)));
            }
            _mm_movemask_epi8(acc) as u32
        };
        if hits != SSE_ALL {
            return i + first_clear(hits);
        }
        i += SSE_BLOCK;
    }
    i + skip_in_set_scalar(&buf[i..], set)
}

#[allow(
    clippy::cast_sign_loss,
    reason = "movemask returns the lane mask as a signed int"
)]
pub(super) fn skip_space_and_control_sse2(buf: &[u8]) -> usize {
    let mut i = 0;
    for block in buf.chunks_exact(SSE_BLOCK) {
        // SAFETY: `block` is exactly 16 readable bytes and SSE2 is always
        // available on x86_64.
        let in_range = unsafe {
            let chars = _mm_loadu_si128(block.as_ptr().cast::<__m128i>());
            // Unsigned `c <= 0x20` is `min(c, 0x20) == c`.
            let low = _mm_cmpeq_epi8(_mm_min_epu8(chars, _mm_set1_epi8(0x20)), chars);
            _mm_movemask_epi8(low) as u32
        };
        if in_range != SSE_ALL {
            return i + first_clear(in_range);
        }
        i += SSE_BLOCK;
    }
    i + skip_space_and_control_scalar(&buf[i..])
}

/// Entry point for the AVX2 kernel. Falls back to SSE2 when the CPU lacks
/// AVX2.
pub(super) fn skip_space_and_control_avx2_checked(buf: &[u8]) -> usize {
    if !crate::capability::avx2_available() {
        return skip_space_and_control_sse2(buf);
    }
    // SAFETY: AVX2 support was confirmed at runtime just above.
    unsafe { skip_space_and_control_avx2(buf) }
}

#[target_feature(enable = "avx2")]
#[allow(
    clippy::cast_sign_loss,
    reason = "movemask returns the lane mask as a signed int"
)]
unsafe fn skip_space_and_control_avx2(buf: &[u8]) -> usize {
    let limit = _mm256_set1_epi8(0x20);
    let mut i = 0;
    for block in buf.chunks_exact(AVX_BLOCK) {
        // `block` is exactly 32 readable bytes.
        let chars = _mm256_loadu_si256(block.as_ptr().cast::<__m256i>());
        let low = _mm256_cmpeq_epi8(_mm256_min_epu8(chars, limit), chars);
        let in_range = _mm256_movemask_epi8(low) as u32;
        if in_range != u32::MAX {
            return i + first_clear(in_range);
        }
        i += AVX_BLOCK;
    }
    // Tail is under 32 bytes: one SSE2 block at most, then scalar.
    i + skip_space_and_control_sse2(&buf[i..])
}
