use super::*;

const STRATEGIES: &[(&str, NumericParser)] = &[
    ("fast-float", parse_numeric),
    ("lexical", parse_numeric_lexical),
];

#[test]
#[allow(clippy::approx_constant, reason = "literal taken from input text")]
fn parses_literal_prefix() {
    for &(name, parse) in STRATEGIES {
        assert_eq!(parse(b"3.14,rest"), (3.14, 4), "{name}");
        assert_eq!(parse(b"42 "), (42.0, 2), "{name}");
        assert_eq!(parse(b"-2.5e3x"), (-2500.0, 6), "{name}");
        assert_eq!(parse(b"0.5"), (0.5, 3), "{name}");
        assert_eq!(parse(b"7"), (7.0, 1), "{name}");
    }
}

#[test]
fn rejects_non_numbers() {
    for &(name, parse) in STRATEGIES {
        let inputs: [&[u8]; 7] = [b"", b"abc", b",1", b" 1", b"-", b"+", b"-x"];
        for input in inputs {
            assert_eq!(parse(input).1, 0, "{name} on {input:?}");
        }
    }
}

#[test]
fn rejects_special_value_spellings() {
    for &(name, parse) in STRATEGIES {
        let inputs: [&[u8]; 6] = [b"nan", b"NaN", b"inf", b"-inf", b"Infinity", b"+nan"];
        for input in inputs {
            assert_eq!(parse(input).1, 0, "{name} on {input:?}");
        }
    }
}

#[test]
fn leading_dot_fraction() {
    for &(name, parse) in STRATEGIES {
        let (value, consumed) = parse(b".25;");
        assert_eq!(consumed, 3, "{name}");
        assert!((value - 0.25).abs() < f64::EPSILON, "{name}");
    }
}

#[test]
fn strategies_agree_on_plain_decimals() {
    let inputs: &[&[u8]] = &[
        b"1",
        b"10.75",
        b"-0.001",
        b"123456789.5",
        b"6.02e23",
        b"1E-3",
        b"5e",
        b"5e,",
        b"1.5E+",
        b"2em",
        b"-7.25e-x",
    ];
    for input in inputs {
        assert_eq!(parse_numeric(input), parse_numeric_lexical(input), "{input:?}");
    }
}

#[test]
fn starts_decimal_classifies_first_bytes() {
    assert!(starts_decimal(b"1"));
    assert!(starts_decimal(b".5"));
    assert!(starts_decimal(b"-1"));
    assert!(starts_decimal(b"+.5"));
    assert!(!starts_decimal(b""));
    assert!(!starts_decimal(b"-"));
    assert!(!starts_decimal(b"e5"));
    assert!(!starts_decimal(b"--1"));
}

#[test]
fn incomplete_exponent_leaves_marker() {
    for &(name, parse) in STRATEGIES {
        assert_eq!(parse(b"2em"), (2.0, 1), "{name}");
        assert_eq!(parse(b"5e"), (5.0, 1), "{name}");
        assert_eq!(parse(b"1.5E+"), (1.5, 3), "{name}");
        assert_eq!(parse(b"-7.25e-x"), (-7.25, 5), "{name}");
    }
}

#[test]
fn mantissa_len_stops_at_marker() {
    assert_eq!(mantissa_len(b"1.5E+"), 3);
    assert_eq!(mantissa_len(b"-2em"), 2);
    assert_eq!(mantissa_len(b"+"), 1);
    assert_eq!(mantissa_len(b""), 0);
}
