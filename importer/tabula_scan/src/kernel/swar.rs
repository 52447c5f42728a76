//! Portable kernels over 8-byte words (SIMD within a register).
//!
//! Words are loaded little-endian so byte `k` of the block lives in bits
//! `8k..8k+8`; the first non-matching byte is then `trailing_zeros / 8` of
//! the "miss" mask. All per-lane arithmetic keeps each lane below `0x100`,
//! so no carry leaks into the neighbouring byte.

use super::{skip_in_set_scalar, skip_space_and_control_scalar};
use crate::ByteSet;

const WORD: usize = 8;
const LO7: u64 = 0x7F7F_7F7F_7F7F_7F7F;
const HI: u64 = 0x8080_8080_8080_8080;

#[inline]
const fn splat(byte: u8) -> u64 {
    0x0101_0101_0101_0101 * byte as u64
}

/// High bit set in every lane of `v` that is zero.
#[inline]
const fn zero_lanes(v: u64) -> u64 {
    // (v & 0x7F) + 0x7F sets the high bit for 0x01..=0x7F; OR-ing `v` catches
    // lanes with only the high bit set. Whatever is left clear was zero.
    !((v & LO7).wrapping_add(LO7) | v) & HI
}

/// High bit set in every lane of `v` that is greater than `0x20`.
#[inline]
const fn above_space_lanes(v: u64) -> u64 {
    // (v & 0x7F) + 0x5F reaches 0x80 exactly when the low seven bits are
    // >= 0x21. Max lane value is 0x7F + 0x5F = 0xDE.
    ((v & LO7).wrapping_add(splat(0x5F)) | v) & HI
}

#[inline]
fn load(block: &[u8]) -> u64 {
    let mut word = [0u8; WORD];
    word.copy_from_slice(block);
    u64::from_le_bytes(word)
}

#[inline]
fn first_lane(mask: u64) -> usize {
    (mask.trailing_zeros() / 8) as usize
}

pub(super) fn skip_in_set(buf: &[u8], set: &ByteSet, members: &[u8]) -> usize {
    let mut i = 0;
    for block in buf.chunks_exact(WORD) {
        let word = load(block);
        let hits = members
            .iter()
            .fold(0, |acc, &m| acc | zero_lanes(word ^ splat(m)));
        let misses = !hits & HI;
        if misses != 0 {
            return i + first_lane(misses);
        }
        i += WORD;
    }
    i + skip_in_set_scalar(&buf[i..], set)
}

pub(super) fn skip_space_and_control(buf: &[u8]) -> usize {
    let mut i = 0;
    for block in buf.chunks_exact(WORD) {
        let misses = above_space_lanes(load(block));
        if misses != 0 {
            return i + first_lane(misses);
        }
        i += WORD;
    }
    i + skip_space_and_control_scalar(&buf[i..])
}
