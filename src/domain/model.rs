use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single typed field value extracted from an NDJSON line.
///
/// Nested arrays and objects are never decomposed; they are carried as
/// `Raw` text in their serde_json rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Raw(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Raw(r) => write!(f, "{}", r),
        }
    }
}

/// One parsed NDJSON line: field order as it appeared in the source object,
/// plus the original trimmed line kept for diagnostics.
///
/// A record is never empty; empty JSON objects are rejected during parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub fields: Vec<(String, Value)>,
    pub source_line: String,
}

impl Record {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == key)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

/// Outcome of one ingestion call. A new parse replaces any prior outcome,
/// it never appends to one.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Success(Vec<Record>),
    Error(String),
}

/// The active key/value predicate. Always applied against the full record
/// sequence; filters do not compose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub key: String,
    pub value: Option<String>,
    pub active: bool,
}

impl FilterState {
    pub fn apply(&mut self, key: String, value: Option<String>) {
        self.key = key;
        self.value = value;
        self.active = true;
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }
}

/// Export target format; fixes both the serializer and the default suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("ndjson_export.{}", self.extension())
    }
}
