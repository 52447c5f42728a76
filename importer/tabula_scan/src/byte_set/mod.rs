//! Skip sets: the byte values a [`Cursor::skip`](crate::Cursor::skip) treats
//! as ignorable.
//!
//! Membership is a 256-bit table, so the scalar loop is one shift and mask
//! per byte. The first [`MAX_VECTOR_MEMBERS`] distinct members are also kept
//! as a list, which is what the block kernels compare against. Sets with
//! more members than that are scanned with the table on every path.

/// Largest set the block kernels handle by per-member comparison.
pub const MAX_VECTOR_MEMBERS: usize = 16;

/// A set of byte values, buildable in `const` context.
///
/// ```text
/// const DELIMS: ByteSet = ByteSet::new(b",;\t");
/// cursor.skip(&DELIMS);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ByteSet {
    /// Membership bitmap, one bit per byte value.
    bits: [u64; 4],
    /// Distinct members in insertion order (first `MAX_VECTOR_MEMBERS` only).
    members: [u8; MAX_VECTOR_MEMBERS],
    /// Number of distinct members (0..=256).
    count: u16,
}

impl ByteSet {
    /// The set with no members.
    pub const EMPTY: ByteSet = ByteSet {
        bits: [0; 4],
        members: [0; MAX_VECTOR_MEMBERS],
        count: 0,
    };

    /// Space, tab, carriage return and line feed.
    pub const BLANK: ByteSet = ByteSet::new(b" \t\r\n");

    /// ASCII decimal digits.
    pub const DIGITS: ByteSet = ByteSet::new(b"0123456789");

    /// Build a set from a list of bytes. Duplicates are ignored.
    pub const fn new(bytes: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < bytes.len() {
            set = set.with(bytes[i]);
            i += 1;
        }
        set
    }

    /// Returns a copy of this set with `byte` added.
    #[must_use]
    pub const fn with(mut self, byte: u8) -> Self {
        if self.contains(byte) {
            return self;
        }
        self.bits[(byte >> 6) as usize] |= 1u64 << (byte & 63);
        if (self.count as usize) < MAX_VECTOR_MEMBERS {
            self.members[self.count as usize] = byte;
        }
        self.count += 1;
        self
    }

    /// Returns `true` if `byte` is a member.
    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.bits[(byte >> 6) as usize] & (1u64 << (byte & 63)) != 0
    }

    /// Number of distinct members.
    pub const fn len(&self) -> usize {
        self.count as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The member list for block comparison, or `None` when the set is too
    /// large for the block kernels.
    #[inline]
    #[cfg_attr(
        all(not(target_arch = "x86_64"), not(target_pointer_width = "64")),
        allow(dead_code, reason = "only the block kernels compare members")
    )]
    pub(crate) fn vector_members(&self) -> Option<&[u8]> {
        let count = self.len();
        (count <= MAX_VECTOR_MEMBERS).then(|| &self.members[..count])
    }
}

impl Default for ByteSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<&[u8]> for ByteSet {
    fn from(bytes: &[u8]) -> Self {
        ByteSet::new(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteSet {
    fn from(bytes: &[u8; N]) -> Self {
        ByteSet::new(bytes)
    }
}

impl FromIterator<u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(ByteSet::EMPTY, ByteSet::with)
    }
}

#[cfg(test)]
mod tests;
