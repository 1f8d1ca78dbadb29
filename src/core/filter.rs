use crate::domain::model::{Record, Value};

/// Selects the records matching a key/value predicate, preserving order.
///
/// A blank key is the no-filter sentinel: the input comes back unchanged.
/// With a key but no value, a record matches when the field exists and is
/// not null. With both, the field's textual form must equal or contain the
/// filter value, case-insensitively. Equals is subsumed by contains today;
/// both checks are kept deliberately so they diverge correctly if matching
/// ever becomes case-sensitive.
pub fn filter_by_key(records: &[Record], key: &str, value: Option<&str>) -> Vec<Record> {
    let trimmed_key = key.trim();
    if trimmed_key.is_empty() {
        return records.to_vec();
    }

    let trimmed_value = value.map(str::trim).filter(|v| !v.is_empty());

    records
        .iter()
        .filter(|record| matches(record, trimmed_key, trimmed_value))
        .cloned()
        .collect()
}

fn matches(record: &Record, key: &str, value: Option<&str>) -> bool {
    let Some(field_value) = record.get(key) else {
        return false;
    };

    match value {
        None => !field_value.is_null(),
        Some(needle) => {
            if field_value.is_null() {
                return false;
            }
            let haystack = field_value.to_string().trim().to_lowercase();
            let needle = needle.to_lowercase();
            haystack == needle || haystack.contains(&needle)
        }
    }
}
