use crate::domain::model::{Record, Value};

/// Renders records as a pretty-printed JSON array, two-space indent, one
/// field per line, records in input order.
///
/// The output format is contractual: strings escape only embedded double
/// quotes (newlines and other control characters pass through literally),
/// all other value kinds emit their plain textual form unquoted. An empty
/// input renders as `[\n]`.
pub fn to_json(records: &[Record]) -> String {
    let mut out = String::from("[\n");

    for (record_index, record) in records.iter().enumerate() {
        out.push_str("  {\n");

        let field_count = record.fields.len();
        for (field_index, (key, value)) in record.fields.iter().enumerate() {
            out.push_str("    \"");
            out.push_str(key);
            out.push_str("\": ");
            out.push_str(&render_value(value));
            if field_index < field_count - 1 {
                out.push(',');
            }
            out.push('\n');
        }

        out.push_str("  }");
        if record_index < records.len() - 1 {
            out.push(',');
        }
        out.push('\n');
    }

    out.push(']');
    out
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Str(s) => format!("\"{}\"", s.replace('"', "\\\"")),
        other => other.to_string(),
    }
}
