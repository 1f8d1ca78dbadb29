use crate::core::extract::extract_value;
use crate::domain::model::{ParseOutcome, Record};

const MAX_REPORTED_ERRORS: usize = 5;

/// Parses NDJSON text into records, one JSON object per line.
///
/// Blank lines are skipped. Malformed lines, non-object lines and empty
/// objects are recorded as per-line errors and never abort the scan; any
/// surviving records win over any number of failed lines. Only when nothing
/// at all parses does the accumulated error list surface.
pub fn parse_text(text: &str) -> ParseOutcome {
    let mut records = Vec::new();
    let mut errors = Vec::new();
    let mut total_lines = 0usize;

    for (index, line) in text.lines().enumerate() {
        total_lines += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(serde_json::Value::Object(object)) => {
                if object.is_empty() {
                    errors.push(format!("Line {}: Empty JSON object", index + 1));
                } else {
                    let fields = object
                        .iter()
                        .map(|(key, value)| (key.clone(), extract_value(value)))
                        .collect();
                    records.push(Record {
                        fields,
                        source_line: trimmed.to_string(),
                    });
                }
            }
            Ok(other) => {
                errors.push(format!(
                    "Line {}: Not a valid JSON object - found {}",
                    index + 1,
                    json_kind(&other)
                ));
                tracing::debug!("line {} is not an object", index + 1);
            }
            Err(e) => {
                errors.push(format!("Line {}: {}", index + 1, e));
                tracing::debug!("failed to parse line {}: {}", index + 1, e);
            }
        }
    }

    resolve(records, errors, total_lines)
}

fn resolve(records: Vec<Record>, errors: Vec<String>, total_lines: usize) -> ParseOutcome {
    if !records.is_empty() {
        return ParseOutcome::Success(records);
    }
    if total_lines == 0 {
        return ParseOutcome::Error("File is empty or contains no valid JSON objects.".to_string());
    }
    if errors.is_empty() {
        return ParseOutcome::Error(
            "Failed to parse any valid JSON lines. Check file format.".to_string(),
        );
    }

    let shown = errors
        .iter()
        .take(MAX_REPORTED_ERRORS)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");
    let mut message = format!("Failed to parse file. Errors:\n{}", shown);
    if errors.len() > MAX_REPORTED_ERRORS {
        message.push_str(&format!(
            "\n... and {} more errors",
            errors.len() - MAX_REPORTED_ERRORS
        ));
    }
    ParseOutcome::Error(message)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
