use ndjson_parser::core::parser::parse_text;
use ndjson_parser::{ParseOutcome, Value};

fn expect_success(outcome: ParseOutcome) -> Vec<ndjson_parser::Record> {
    match outcome {
        ParseOutcome::Success(records) => records,
        ParseOutcome::Error(message) => panic!("expected success, got error: {}", message),
    }
}

fn expect_error(outcome: ParseOutcome) -> String {
    match outcome {
        ParseOutcome::Error(message) => message,
        ParseOutcome::Success(records) => {
            panic!("expected error, got {} records", records.len())
        }
    }
}

#[test]
fn test_parses_one_object_per_line() {
    let input = "{\"name\": \"John\", \"age\": 30}\n{\"name\": \"Jane\", \"age\": 25}";
    let records = expect_success(parse_text(input));

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("name"), Some(&Value::Str("John".into())));
    assert_eq!(records[0].get("age"), Some(&Value::Int(30)));
    assert_eq!(records[1].get("name"), Some(&Value::Str("Jane".into())));
}

#[test]
fn test_preserves_record_and_field_order() {
    let input = "{\"b\": 1, \"a\": 2}\n{\"z\": 3}";
    let records = expect_success(parse_text(input));

    let names: Vec<&str> = records[0].field_names().collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(records[1].field_names().collect::<Vec<_>>(), vec!["z"]);
}

#[test]
fn test_keeps_trimmed_source_line() {
    let input = "   {\"a\": 1}   ";
    let records = expect_success(parse_text(input));
    assert_eq!(records[0].source_line, "{\"a\": 1}");
}

#[test]
fn test_blank_lines_are_skipped() {
    let input = "{\"a\": 1}\n\n   \n{\"b\": 2}\n";
    let records = expect_success(parse_text(input));
    assert_eq!(records.len(), 2);
}

#[test]
fn test_trailing_line_without_terminator() {
    let input = "{\"a\": 1}\n{\"b\": 2}";
    let records = expect_success(parse_text(input));
    assert_eq!(records.len(), 2);
}

#[test]
fn test_valid_lines_survive_invalid_neighbors() {
    let input = "not json\n{\"a\": 1}\n[1, 2, 3]\n{}\n{\"b\": 2}";
    let records = expect_success(parse_text(input));
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("a"), Some(&Value::Int(1)));
    assert_eq!(records[1].get("b"), Some(&Value::Int(2)));
}

#[test]
fn test_empty_input_is_an_error() {
    let message = expect_error(parse_text(""));
    assert_eq!(message, "File is empty or contains no valid JSON objects.");
}

#[test]
fn test_whitespace_only_input() {
    let message = expect_error(parse_text("   \n  \n"));
    assert_eq!(
        message,
        "Failed to parse any valid JSON lines. Check file format."
    );
}

#[test]
fn test_empty_object_is_rejected() {
    let message = expect_error(parse_text("{}"));
    assert!(message.contains("Empty JSON object"), "got: {}", message);
    assert!(message.contains("Line 1"), "got: {}", message);
}

#[test]
fn test_non_object_line_is_rejected() {
    let message = expect_error(parse_text("[1, 2, 3]"));
    assert!(
        message.contains("Not a valid JSON object"),
        "got: {}",
        message
    );
}

#[test]
fn test_error_messages_are_capped_at_five() {
    let input = (1..=10)
        .map(|i| format!("invalid{}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let message = expect_error(parse_text(&input));

    assert!(message.starts_with("Failed to parse file. Errors:\n"));
    assert!(message.contains("Line 1:"));
    assert!(message.contains("Line 5:"));
    assert!(!message.contains("Line 6:"));
    assert!(message.contains("... and"), "got: {}", message);
    assert!(message.contains("more errors"), "got: {}", message);
    assert!(message.ends_with("... and 5 more errors"), "got: {}", message);
}

#[test]
fn test_few_errors_are_not_truncated() {
    let message = expect_error(parse_text("bad1\nbad2"));
    assert!(message.contains("Line 1:"));
    assert!(message.contains("Line 2:"));
    assert!(!message.contains("more errors"));
}

#[test]
fn test_line_numbers_count_blank_and_failed_lines() {
    let message = expect_error(parse_text("\n\nbad"));
    assert!(message.contains("Line 3:"), "got: {}", message);
}

#[test]
fn test_value_extraction_through_parse() {
    let input = "{\"price\": 100.0, \"tax\": 29.99, \"ok\": true, \"gone\": null, \
                 \"tags\": [\"a\", \"b\"], \"meta\": {\"k\": 1}}";
    let records = expect_success(parse_text(input));
    let record = &records[0];

    assert_eq!(record.get("price"), Some(&Value::Int(100)));
    assert_eq!(record.get("tax"), Some(&Value::Float(29.99)));
    assert_eq!(record.get("ok"), Some(&Value::Bool(true)));
    assert_eq!(record.get("gone"), Some(&Value::Null));
    assert_eq!(record.get("tags"), Some(&Value::Raw("[\"a\",\"b\"]".into())));
    assert_eq!(record.get("meta"), Some(&Value::Raw("{\"k\":1}".into())));
}
