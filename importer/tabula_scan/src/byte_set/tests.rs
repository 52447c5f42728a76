use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_set_contains_nothing() {
    let set = ByteSet::EMPTY;
    assert!(set.is_empty());
    assert!((0..=255u8).all(|b| !set.contains(b)));
    assert_eq!(set.vector_members(), Some(&[][..]));
}

#[test]
fn new_records_members() {
    let set = ByteSet::new(b" ,;");
    assert_eq!(set.len(), 3);
    assert!(set.contains(b' '));
    assert!(set.contains(b','));
    assert!(set.contains(b';'));
    assert!(!set.contains(b'a'));
    assert!(!set.contains(0));
    assert_eq!(set.vector_members(), Some(&b" ,;"[..]));
}

#[test]
fn duplicates_are_ignored() {
    let set = ByteSet::new(b"aabba");
    assert_eq!(set.len(), 2);
    assert_eq!(set.vector_members(), Some(&b"ab"[..]));
}

#[test]
fn high_bytes_and_boundaries() {
    let set = ByteSet::new(&[0x00, 0x3F, 0x40, 0x7F, 0x80, 0xFF]);
    for b in [0x00, 0x3F, 0x40, 0x7F, 0x80, 0xFF] {
        assert!(set.contains(b), "missing {b:#04x}");
    }
    assert!(!set.contains(0x41));
    assert!(!set.contains(0xFE));
}

#[test]
fn large_set_has_no_vector_members() {
    let set: ByteSet = (b'a'..=b'z').collect();
    assert_eq!(set.len(), 26);
    assert!(set.contains(b'q'));
    assert_eq!(set.vector_members(), None);
}

#[test]
fn exactly_sixteen_members_is_vectorizable() {
    let set = ByteSet::new(b"0123456789abcdef");
    assert_eq!(set.len(), MAX_VECTOR_MEMBERS);
    assert_eq!(set.vector_members().map(<[u8]>::len), Some(16));
}

#[test]
fn full_set() {
    let set: ByteSet = (0..=255u8).collect();
    assert_eq!(set.len(), 256);
    assert!((0..=255u8).all(|b| set.contains(b)));
}

#[test]
fn conversions_agree() {
    let a = ByteSet::from(b"xyz");
    let b = ByteSet::from(&b"zyx"[..]);
    assert!(a.contains(b'y') && b.contains(b'y'));
    assert_eq!(a.len(), b.len());
}

#[test]
fn predefined_sets() {
    assert!(ByteSet::BLANK.contains(b'\t'));
    assert!(ByteSet::BLANK.contains(b'\n'));
    assert!(!ByteSet::BLANK.contains(0x0B));
    assert_eq!(ByteSet::DIGITS.len(), 10);
    assert!(!ByteSet::DIGITS.contains(b'.'));
}
