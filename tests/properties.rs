//! Corpus-wide properties: validity, idempotence, strict passthrough,
//! and error position bounds.

use jsonmend::repair;

/// Malformed inputs whose repaired output must satisfy a strict parser.
const MALFORMED: &[&str] = &[
    "{name: 'John', age: 30}",
    "{'a':2, b: 'x'}",
    "[1 2 3]",
    "[1, 2, 3,]",
    "{\"a\":1,}",
    "{,\"a\":1}",
    "{\"a\" 1}",
    "{\"a\":}",
    "{\"a\"",
    "{",
    "[1,",
    "[\"hello]",
    "[\"hello,",
    "\"hello",
    "{\"a\":\"b,c,\"d\":\"e\"}",
    "\"a \"b\" c\"",
    "\"hello\" + \"world\"",
    "'abc' + 'def'",
    "\\\"hello\\\"",
    "{\"valid\": True, \"invalid\": False, \"empty\": None}",
    "{a: undefined}",
    "NumberLong(\"2\")",
    "callback({a:2});",
    "[NaN]",
    "00789",
    "{a:007}",
    "[1.1.1]",
    "{\u{201C}a\u{201D}: 1}",
    "{\"a\":\u{00A0}1}",
    "```json\n{a:1}\n```",
    "{\"a\":1}\n{\"b\":2}",
    "1\n2\n3",
    "{\"a\":1},{\"b\":2}",
    "{\"a\":1}}}",
    "[1, /* a */ 2, // b\n 3]",
    "{\n  // comment\n  \"name\": \"John\"\n}",
    "[1, 2, 3, ...]",
    "{\"url\":https://example.com/path}",
    "\"ab\ncd\"",
    "{\"a\":\"b\u{0008}\u{000C}\"}",
];

/// Already-strict documents that must come back byte-identical.
const STRICT: &[&str] = &[
    "{\"a\":1}",
    "{}",
    "[]",
    "[1, 2, 3]",
    "{\"nested\": {\"x\": [1.5, true, null, \"s\"]}}",
    "\"hello\"",
    "\"a\\nb\"",
    "\"\\u0041\"",
    "-42",
    "3.14",
    "[1e+2, -3.5e-1, 6E0]",
    "true",
    "false",
    "null",
    "  {\"a\": 1}\n",
    "{\r\n  \"a\": \"b\"\r\n}",
    "{\"emoji\": \"😀\", \"cjk\": \"你好\"}",
];

/// Inputs that must be rejected.
const INVALID: &[&str] = &[
    "",
    "   ",
    "```",
    "// only a comment",
    "{\"a\":1} extra",
    "[1] [2]",
    "{+}",
    "{\"a\" !}",
    "\"a\u{0002}b\"",
    "\"\\uZZZZ\"",
];

#[test]
fn repaired_output_is_strict_json() {
    for input in MALFORMED {
        let out = repair(input).unwrap_or_else(|e| panic!("repair failed for {:?}: {}", input, e));
        serde_json::from_str::<serde_json::Value>(&out)
            .unwrap_or_else(|e| panic!("output not strict for {:?} -> {:?}: {}", input, out, e));
    }
}

#[test]
fn repair_is_idempotent() {
    for input in MALFORMED.iter().chain(STRICT) {
        let once = repair(input).unwrap();
        let twice = repair(&once).unwrap_or_else(|e| {
            panic!("second repair failed for {:?} -> {:?}: {}", input, once, e)
        });
        assert_eq!(twice, once, "input={:?}", input);
    }
}

#[test]
fn strict_input_passes_through_unchanged() {
    for input in STRICT {
        assert_eq!(repair(input).unwrap(), *input, "input={:?}", input);
    }
}

#[test]
fn error_positions_stay_in_bounds() {
    for input in INVALID {
        let err = repair(input).unwrap_err();
        assert!(
            err.position <= input.len(),
            "position {} out of bounds for {:?}",
            err.position,
            input
        );
    }
}
