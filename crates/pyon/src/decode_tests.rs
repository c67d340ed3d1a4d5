// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    int            = { "42",        Value::from(42) },
    negative       = { "-7",        Value::from(-7) },
    float          = { "99.5",      Value::from(99.5) },
    exponent       = { "1e3",       Value::from(1000.0) },
    text           = { "\"smp:4\"", Value::from("smp:4") },
    single_quoted  = { "'idle'",    Value::from("idle") },
    true_lower     = { "true",      Value::Bool(true) },
    false_python   = { "False",     Value::Bool(false) },
    none           = { "None",      Value::Null },
    null           = { "null",      Value::Null },
    padded         = { "  \n 5 \n", Value::from(5) },
)]
fn decode_scalar(body: &str, expected: Value) {
    assert_eq!(decode(body).unwrap(), expected);
}

#[test]
fn decode_escaped_quotes_in_string() {
    let value = decode(r#""gpu:0:\"GT200 [GeForce GTX 260]\"""#).unwrap();
    assert_eq!(value.as_str(), Some("gpu:0:\"GT200 [GeForce GTX 260]\""));
}

#[test]
fn decode_escapes() {
    let value = decode(r#""a\\b\nc\td\x41\u00e9""#).unwrap();
    assert_eq!(value.as_str(), Some("a\\b\nc\tdAé"));
}

#[test]
fn decode_nested_map_preserves_order() {
    let body = r#"
{
  "id": "00",
  "status": "RUNNING",
  "options": {"machine-id": "1", "paused": "false"},
  "idle": false
}"#;
    let value = decode(body).unwrap();
    let map = value.as_map().unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "status", "options", "idle"]);
    assert_eq!(value.get("options").and_then(|o| o.get("machine-id")), Some(&Value::from("1")));
    assert_eq!(value.get("idle"), Some(&Value::Bool(false)));
}

#[test]
fn decode_list_of_pairs() {
    let value = decode(r#"["Build", ["Version", "7.1.24"], ["Bits", "32"]]"#).unwrap();
    let items = value.as_list().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Value::from("Build"));
    assert_eq!(items[2], Value::List(vec![Value::from("Bits"), Value::from("32")]));
}

#[test]
fn decode_accepts_trailing_commas() {
    let value = decode("[1, 2, {\"a\": 3,},]").unwrap();
    assert_eq!(value.as_list().map(<[Value]>::len), Some(3));
}

#[test]
fn decode_empty_containers() {
    assert_eq!(decode("[]").unwrap(), Value::List(vec![]));
    assert_eq!(decode("{ }").unwrap(), Value::Map(ValueMap::new()));
}

#[test]
fn decode_large_integer_falls_back_to_float() {
    let value = decode("18446744073709551616").unwrap();
    assert!(matches!(value, Value::Number(Number::Float(_))));
}

#[test]
fn decode_numeric_map_key() {
    let value = decode("{0: \"zero\"}").unwrap();
    assert_eq!(value.get("0"), Some(&Value::from("zero")));
}

#[test]
fn unterminated_string_is_error() {
    let err = decode("{\"id\": \"00}").unwrap_err();
    assert!(matches!(err, FramingError::UnterminatedString { .. }), "{err:?}");
}

#[test]
fn unbalanced_brackets_is_error() {
    let err = decode("{\"a\": [1, 2}").unwrap_err();
    assert!(
        matches!(err, FramingError::UnbalancedDelimiter { expected: ']', found: '}', .. }),
        "{err:?}"
    );
}

#[yare::parameterized(
    empty          = { "" },
    blank          = { "  \n" },
    open_map       = { "{\"a\": 1" },
    open_list      = { "[1, 2" },
    missing_colon  = { "{\"a\" 1}" },
    bad_literal    = { "maybe" },
    bad_number     = { "1.2.3" },
    bad_escape     = { "\"\\q\"" },
    trailing       = { "1 2" },
    list_key       = { "{[1]: 2}" },
    stray_close    = { "]" },
)]
fn malformed_body_is_error(body: &str) {
    assert!(decode(body).is_err(), "expected error for {body:?}");
}

#[test]
fn nesting_limit_is_enforced() {
    let body = format!("{}{}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
    let err = decode(&body).unwrap_err();
    assert!(matches!(err, FramingError::TooDeep { .. }), "{err:?}");

    let body = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
    assert!(decode(&body).is_ok());
}

#[test]
fn error_span_points_at_problem() {
    let body = "{\"a\": @}";
    let err = decode(body).unwrap_err();
    assert_eq!(err.span().slice(body), "@");
}
