//! Cursors over distinct buffers run on separate threads with no shared
//! state. One worker per buffer, driven by Rayon.

use pretty_assertions::assert_eq;
use rayon::prelude::*;
use tabula_scan::{ByteSet, Cursor, CursorOptions, ScanPath};

/// Sum every number in a `;`-separated buffer.
fn sum_fields(buf: &[u8], path: ScanPath) -> f64 {
    let mut cur = Cursor::with_options(buf, CursorOptions::default().path(path).transient(true));
    let separators = ByteSet::BLANK.with(b';');
    let mut total = 0.0;
    loop {
        cur.skip(&separators);
        match cur.parse_double() {
            Some(value) => total += value,
            None => return total,
        }
    }
}

fn make_buffer(seed: usize) -> Vec<u8> {
    let mut buf = Vec::new();
    for i in 0..=seed % 50 {
        buf.extend_from_slice(format!("{i};").as_bytes());
        buf.resize(buf.len() + i % 37, b' ');
    }
    buf
}

#[allow(clippy::cast_precision_loss, reason = "small integers stay exact")]
fn expected_sum(seed: usize) -> f64 {
    let n = seed % 50;
    (n * (n + 1) / 2) as f64
}

#[test]
fn independent_cursors_in_parallel() {
    let buffers: Vec<Vec<u8>> = (0..256).map(make_buffer).collect();
    for path in [ScanPath::Scalar, ScanPath::Vectorized] {
        let sums: Vec<f64> = buffers
            .par_iter()
            .map(|buf| sum_fields(buf, path))
            .collect();
        let expected: Vec<f64> = (0..256).map(expected_sum).collect();
        assert_eq!(sums, expected, "{path:?}");
    }
}

#[test]
fn parallel_matches_sequential() {
    let buffers: Vec<Vec<u8>> = (0..64)
        .map(|seed| {
            let mut buf = vec![b'\t'; seed * 3];
            buf.extend_from_slice(&make_buffer(seed * 7));
            buf
        })
        .collect();
    let sequential: Vec<usize> = buffers
        .iter()
        .map(|buf| {
            let mut cur = Cursor::new(buf);
            cur.skip_space_and_control();
            cur.pos()
        })
        .collect();
    let parallel: Vec<usize> = buffers
        .par_iter()
        .map(|buf| {
            let mut cur = Cursor::new(buf);
            cur.skip_space_and_control();
            cur.pos()
        })
        .collect();
    assert_eq!(parallel, sequential);
}
