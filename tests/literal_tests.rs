//! Conformance tests for the literal grammar: boundary cases and
//! documented scenarios, one assertion block per grammar rule.

use std::collections::BTreeMap;
use xini::{
    parse_array, parse_array_strict, parse_dict, parse_dict_strict, parse_dict_with_options,
    parse_int, render_array, render_binary, render_dict, render_dict_with_options, render_hex,
    DictOptions, Error, Radix, Separator,
};

fn dict(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn array_boundaries() {
    assert_eq!(parse_array("[]"), Vec::<String>::new());
    assert_eq!(parse_array("[a]"), vec!["a"]);
    assert_eq!(parse_array("[value, value2]"), vec!["value", "value2"]);
}

#[test]
fn array_whitespace_tolerance() {
    assert_eq!(parse_array("[ a ,b , c ]"), vec!["a", "b", "c"]);
    // Only ASCII spaces are trimmed; the tab survives.
    assert_eq!(parse_array("[\tx]"), vec!["\tx"]);
}

#[test]
fn array_lenient_degradation() {
    // Missing closing bracket: best-effort, not an error.
    assert_eq!(parse_array("[a, b"), vec!["a", "b"]);
    // Garbage without brackets still produces something: the first
    // character is consumed as the assumed delimiter.
    assert_eq!(parse_array("a, b"), vec!["", "b"]);
}

#[test]
fn array_strict_frame_validation() {
    assert_eq!(parse_array_strict("[a, b]").unwrap(), vec!["a", "b"]);
    assert!(matches!(
        parse_array_strict("a, b"),
        Err(Error::MalformedLiteral { kind: "array", .. })
    ));
}

#[test]
fn array_render() {
    assert_eq!(render_array(&[] as &[&str]), "[]");
    assert_eq!(render_array(&["value", "value2"]), "[value, value2]");
}

#[test]
fn array_roundtrip_spec_elements() {
    // Elements free of `,` and `]` with no edge spaces round-trip exactly.
    let elements: Vec<String> = vec!["a".into(), "b c".into(), "a".into(), "".into()];
    assert_eq!(parse_array(&render_array(&elements)), elements);
}

#[test]
fn dict_boundaries() {
    assert!(parse_dict("{}").is_empty());
    assert_eq!(parse_dict("{k: v}"), dict(&[("k", "v")]));
    assert_eq!(
        parse_dict("{key: value, key2: value2}"),
        dict(&[("key", "value"), ("key2", "value2")])
    );
}

#[test]
fn dict_trailing_brace_is_lossy() {
    // A value genuinely ending in `}` cannot be represented: the final
    // brace is stripped unconditionally.
    assert_eq!(parse_dict("{k: v}}"), dict(&[("k", "v")]));

    let lossy = dict(&[("k", "v}")]);
    let rendered = render_dict(&lossy);
    assert_eq!(rendered, "{k: v}}");
    assert_ne!(parse_dict(&rendered), lossy);
}

#[test]
fn dict_degenerate_pairs() {
    assert_eq!(parse_dict("{orphan}"), dict(&[("orphan", "")]));
    assert_eq!(
        parse_dict("{a: 1, orphan, b: 2}"),
        dict(&[("a", "1"), ("orphan", ""), ("b", "2")])
    );
}

#[test]
fn dict_duplicate_keys_overwrite() {
    assert_eq!(parse_dict("{k: a, k: b, k: c}"), dict(&[("k", "c")]));
}

#[test]
fn dict_separator_variant() {
    let options = DictOptions::new().with_separator(Separator::Semicolon);
    let parsed = parse_dict_with_options("{a: 1; b: 2}", &options);
    assert_eq!(parsed, dict(&[("a", "1"), ("b", "2")]));
    assert_eq!(render_dict_with_options(&parsed, &options), "{a: 1; b: 2}");

    // With the semicolon dialect, commas are ordinary value characters.
    let parsed = parse_dict_with_options("{list: a,b,c}", &options);
    assert_eq!(parsed, dict(&[("list", "a,b,c")]));
}

#[test]
fn dict_render_is_key_sorted_and_deterministic() {
    let map = dict(&[("z", "26"), ("a", "1")]);
    assert_eq!(render_dict(&map), "{a: 1, z: 26}");
    assert_eq!(render_dict(&BTreeMap::new()), "{}");
}

#[test]
fn dict_strict_frame_validation() {
    assert!(parse_dict_strict("{a: 1}").is_ok());
    assert!(matches!(
        parse_dict_strict("a: 1"),
        Err(Error::MalformedLiteral {
            kind: "dictionary",
            ..
        })
    ));
}

#[test]
fn int_scenarios() {
    assert_eq!(parse_int("0x1A").unwrap(), 26);
    assert_eq!(parse_int("0b101").unwrap(), 5);
    assert_eq!(parse_int("42").unwrap(), 42);
    assert!(matches!(
        parse_int("notanumber"),
        Err(Error::InvalidLiteral { .. })
    ));
}

#[test]
fn int_render_scenarios() {
    assert_eq!(render_hex(26), "0x1A");
    assert_eq!(render_binary(5), format!("0b{}101", "0".repeat(61)));
}

#[test]
fn int_negative_rendering_is_twos_complement() {
    assert_eq!(render_hex(-1), "0xFFFFFFFFFFFFFFFF");
    assert_eq!(render_binary(-1), format!("0b{}", "1".repeat(64)));
    assert_eq!(parse_int("0xFFFFFFFFFFFFFFE6").unwrap(), -26);
}

#[test]
fn int_weak_probe_quirks() {
    // `0xGARBAGE` passes the decimal probe (leading 0) but fails the hex
    // digit parse.
    assert!(parse_int("0xGARBAGE").is_err());
    // An uppercase prefix is not recognized; the greedy decimal parse
    // consumes the leading 0.
    assert_eq!(parse_int("0X1A").unwrap(), 0);
    // Trailing junk after valid digits is ignored.
    assert_eq!(parse_int("42px").unwrap(), 42);
}

#[test]
fn radix_classification() {
    assert_eq!(Radix::classify("0b1"), Radix::Binary);
    assert_eq!(Radix::classify("0x1"), Radix::Hex);
    assert_eq!(Radix::classify("1"), Radix::Decimal);
    assert_eq!(Radix::classify(""), Radix::Decimal);
}
