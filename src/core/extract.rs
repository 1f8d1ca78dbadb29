use crate::domain::model::Value;

/// Maps a parsed JSON element onto the closed [`Value`] union. Total: every
/// legal JSON element has exactly one mapping, nothing errors here.
///
/// Numbers that fit a signed 64-bit integer become `Int` directly. Doubles
/// whose decoded value has no fractional part (`100.0`) are normalized to
/// `Int` as well; only genuinely fractional numbers stay `Float`. Nested
/// arrays and objects are kept opaque as `Raw` text in serde_json's
/// rendering, field order preserved.
pub fn extract_value(element: &serde_json::Value) -> Value {
    match element {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => extract_number(n),
        serde_json::Value::String(s) => Value::Str(s.clone()),
        nested => Value::Raw(nested.to_string()),
    }
}

fn extract_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Int(i);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 => Value::Int(f as i64),
        Some(f) => Value::Float(f),
        // Unreachable for numbers serde_json accepts without arbitrary
        // precision enabled, but the mapping must stay total.
        None => Value::Str(n.to_string()),
    }
}
