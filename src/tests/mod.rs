use super::*;

fn assert_repair(input: &str, expected: &str) {
    let out = repair(input).unwrap();
    assert_eq!(out, expected, "input={:?}", input);
}

fn assert_unchanged(input: &str) {
    assert_repair(input, input);
}

fn to_value(input: &str) -> serde_json::Value {
    let out = repair(input).unwrap();
    serde_json::from_str(&out).unwrap()
}

mod strings_escapes;
