use crate::domain::model::{Record, Value};
use crate::utils::error::{NdjsonError, Result};
use std::collections::BTreeSet;

/// Renders records as CSV with a deterministic header: the union of every
/// field name across all records, sorted lexicographically, so column order
/// does not depend on record shape. Every field is quoted, embedded quotes
/// are doubled, rows are `\n`-terminated. Null and absent fields both render
/// as an empty quoted field. Empty input renders as the empty string.
pub fn to_csv(records: &[Record]) -> Result<String> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let mut keys = BTreeSet::new();
    for record in records {
        for name in record.field_names() {
            keys.insert(name);
        }
    }
    let headers: Vec<&str> = keys.into_iter().collect();

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(&headers)?;
    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|key| match record.get(key) {
                None | Some(Value::Null) => String::new(),
                Some(value) => value.to_string(),
            })
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| NdjsonError::ExportError {
            message: e.to_string(),
        })?;
    Ok(String::from_utf8(bytes)?)
}
