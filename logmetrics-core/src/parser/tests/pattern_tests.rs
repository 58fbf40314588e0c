use crate::conf::ConfigError;
use crate::parser::tests::line;
use crate::parser::{LinePattern, ParseError};
use pretty_assertions::assert_eq;

#[test]
fn extracts_every_field() {
    let pattern = LinePattern::nginx();
    let raw = r#"192.168.1.20 - alice [10/Oct/2023:13:55:36 +0000] "POST /api/v1/items?id=7 HTTP/2.0" 201 2326 "https://example.com/start" "Mozilla/5.0 (X11; Linux x86_64)" 0.045"#;

    let record = pattern.extract(raw).unwrap();

    assert_eq!(record.address, Some("192.168.1.20"));
    assert_eq!(record.user, Some("alice"));
    assert_eq!(record.timestamp, "10/Oct/2023:13:55:36 +0000");
    assert_eq!(record.request, Some("POST /api/v1/items?id=7 HTTP/2.0"));
    assert_eq!(record.status, 201);
    assert_eq!(record.length, Some("2326"));
    assert_eq!(record.referer, Some("https://example.com/start"));
    assert_eq!(record.user_agent, Some("Mozilla/5.0 (X11; Linux x86_64)"));
    assert!((record.response_time_ms - 45.0).abs() < 1e-9);
}

#[test]
fn converts_seconds_to_milliseconds() {
    let raw = line("200", "1.250");
    let record = LinePattern::nginx().extract(&raw).unwrap();

    assert_eq!(record.response_time_ms, 1250.0);
}

#[test]
fn missing_quote_is_no_match() {
    let raw = r#"10.0.0.1 - - [01/Jan/2020:00:00:05 +0000] "GET / HTTP/1.1 200 612 "-" "curl/8.4.0" 0.1"#;

    let err = LinePattern::nginx().extract(raw).unwrap_err();

    assert!(matches!(err, ParseError::NoMatch { .. }));
}

#[test]
fn non_numeric_status_is_no_match() {
    let err = LinePattern::nginx().extract(&line("OK", "0.1")).unwrap_err();

    assert!(matches!(err, ParseError::NoMatch { .. }));
}

#[test]
fn non_ascii_digits_are_no_match() {
    let err = LinePattern::nginx()
        .extract(&line("２００", "0.1"))
        .unwrap_err();

    assert!(matches!(err, ParseError::NoMatch { .. }));
}

#[test]
fn unconvertible_response_time_is_invalid_field() {
    let err = LinePattern::nginx()
        .extract(&line("200", "1x5"))
        .unwrap_err();

    match err {
        ParseError::InvalidField { field, value, .. } => {
            assert_eq!(field, "response_time");
            assert_eq!(value, "1x5");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn error_message_carries_the_line() {
    let err = LinePattern::nginx().extract("garbage").unwrap_err();

    assert!(err.to_string().contains("garbage"));
}

#[test]
fn custom_pattern_needs_required_groups() {
    let err = LinePattern::compile(r"^(?P<status>\d+) (?P<response_time>[\d.]+)$").unwrap_err();

    match err {
        ConfigError::MissingCaptureGroup { group, .. } => assert_eq!(group, "time"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn custom_pattern_rejects_bad_regex() {
    let err = LinePattern::compile("(?P<time>[").unwrap_err();

    assert!(matches!(err, ConfigError::InvalidPattern { .. }));
}

#[test]
fn custom_pattern_extracts_without_optional_fields() {
    let pattern =
        LinePattern::compile(r"^(?P<time>\S+) (?P<status>\d+) (?P<response_time>[\d.]+)$")
            .unwrap();

    let record = pattern.extract("t1 503 0.250").unwrap();

    assert_eq!(record.timestamp, "t1");
    assert_eq!(record.status, 503);
    assert_eq!(record.response_time_ms, 250.0);
    assert_eq!(record.address, None);
    assert_eq!(record.user_agent, None);
}
