//! Property-based tests over generated inputs.
//!
//! These complement the integration tests: the escape policy never fails on
//! arbitrary text, rendering is repeatable, and scalars render as their
//! decimal or literal text.

use proptest::prelude::*;
use serde_toxml::{
    to_string, to_string_with_options, tree::is_xml_char, xml, Encoder, EncoderOptions, Value,
    XmlMap,
};

fn single(key: &str, value: Value) -> Value {
    let mut map = XmlMap::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\r', "&#13;")
}

proptest! {
    #[test]
    fn prop_i64_renders_decimal(n in any::<i64>()) {
        prop_assert_eq!(
            to_string("root", &n).unwrap(),
            format!("<root>{}</root>", n)
        );
    }

    #[test]
    fn prop_u64_renders_decimal(n in any::<u64>()) {
        prop_assert_eq!(
            to_string("root", &n).unwrap(),
            format!("<root>{}</root>", n)
        );
    }

    #[test]
    fn prop_bool_renders_literal(b in any::<bool>()) {
        prop_assert_eq!(
            to_string("root", &b).unwrap(),
            format!("<root>{}</root>", b)
        );
    }

    #[test]
    fn prop_escape_policy_never_fails(s in any::<String>()) {
        let options = EncoderOptions::new().escape_illegal_chars();
        let xml = to_string_with_options("root", &single("k", Value::from(s.as_str())), options);
        prop_assert!(xml.is_ok());
    }

    #[test]
    fn prop_strict_policy_accepts_legal_text(s in "[a-zA-Z0-9 <>&\"'\r\n\t\u{e9}\u{2603}]{0,40}") {
        let xml = to_string("root", &single("k", Value::from(s.as_str()))).unwrap();
        let expected = if s.is_empty() {
            "<root><k/></root>".to_string()
        } else {
            format!("<root><k>{}</k></root>", escape_text(&s))
        };
        prop_assert_eq!(xml, expected);
    }

    #[test]
    fn prop_strict_policy_matches_char_class(s in any::<String>()) {
        let result = to_string("root", &s);
        prop_assert_eq!(result.is_ok(), s.chars().all(is_xml_char));
    }

    #[test]
    fn prop_render_is_repeatable(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let mut encoder = Encoder::new("root", xml!({"list": v})).unwrap();
        encoder.encode().unwrap();
        prop_assert_eq!(encoder.to_string(), encoder.to_string());
        prop_assert_eq!(encoder.root().child("list").map(|l| l.children().len()), Some(v.len()));
    }

    #[test]
    fn prop_option_renders_or_fails(opt in proptest::option::of(any::<i32>())) {
        let result = to_string("root", &opt);
        match opt {
            Some(n) => prop_assert_eq!(result.unwrap(), format!("<root>{}</root>", n)),
            None => prop_assert!(result.is_err()),
        }
    }
}
