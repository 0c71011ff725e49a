use super::*;

#[test]
fn repair_quote_variants() {
    assert_repair("{'a':'b'}", r#"{"a":"b"}"#);
    assert_repair("{\u{201C}a\u{201D}:\u{201C}b\u{201D}}", r#"{"a":"b"}"#);
    assert_repair("{\u{2018}a\u{2019}:\u{2018}b\u{2019}}", r#"{"a":"b"}"#);
    assert_repair("{`a´:`b´}", r#"{"a":"b"}"#);
}

#[test]
fn repair_missing_end_quote() {
    assert_repair(r#""hello"#, r#""hello""#);
    assert_repair(r#"["hello]"#, r#"["hello"]"#);
    assert_repair(r#"{"a":"b}"#, r#"{"a":"b"}"#);
    assert_repair(r#"{"a":"hello world"#, r#"{"a":"hello world"}"#);
}

#[test]
fn repair_missing_end_quote_before_comma() {
    assert_repair(r#"["hello,"#, r#"["hello"]"#);
    assert_repair(r#"{"a":"b,c,"d":"e"}"#, r#"{"a":"b,c,","d":"e"}"#);
    assert_repair(
        r#"{"a":"https://example.com,"b":"c"}"#,
        r#"{"a":"https://example.com,","b":"c"}"#,
    );
}

#[test]
fn repair_unescaped_quotes_inside_string() {
    assert_repair(r#""a "b" c""#, r#""a \"b\" c""#);
}

#[test]
fn repair_url_with_missing_end_quote() {
    assert_repair(
        r#"["https://example.com/x,more"#,
        r#"["https://example.com/x,more"]"#,
    );
}

#[test]
fn repair_concatenated_strings() {
    assert_repair(r#""hello" + "world""#, r#""helloworld""#);
    assert_repair("\"hello\" + /*c*/ \" world\"", r#""hello world""#);
    assert_repair("'abc' + 'def' + 'ghi'", r#""abcdefghi""#);
    // a + not followed by a string is dropped
    assert_repair(r#""a" + "#, r#""a""#);
}

#[test]
fn repair_escaped_string() {
    assert_repair(r#"\"hello\""#, r#""hello""#);
}

#[test]
fn keep_valid_escapes() {
    assert_unchanged(r#""a\nb""#);
    assert_unchanged(r#""a\\b\/c""#);
    assert_unchanged(r#""★""#);
    assert_unchanged(r#""😀""#);
}

#[test]
fn repair_invalid_escape() {
    // unknown escape letters lose their backslash
    assert_repair(r#""a\xb""#, r#""axb""#);
}

#[test]
fn repair_truncated_unicode_escape_at_end() {
    assert_repair(r#""\u26"#, r#""""#);
    assert_repair(r#""ab\u26"#, r#""ab""#);
}

#[test]
fn escape_raw_control_characters() {
    assert_repair("\"ab\ncd\"", r#""ab\ncd""#);
    assert_repair("\"a\tb\"", r#""a\tb""#);
}

#[test]
fn repair_missing_start_quote() {
    assert_repair(r#"{"a":hello"}"#, r#"{"a":"hello"}"#);
}

#[test]
fn strings_with_slashes_pass_through() {
    assert_unchanged(r#""AC/DC""#);
}

#[test]
fn non_bmp_characters_pass_through() {
    assert_unchanged(r#"{"emoji":"😀"}"#);
}
