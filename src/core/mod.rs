pub mod csv;
pub mod export;
pub mod extract;
pub mod filter;
pub mod ingest;
pub mod json;
pub mod parser;

pub use crate::domain::model::{ExportFormat, FilterState, ParseOutcome, Record, Value};
pub use crate::domain::ports::{FileSink, FileSource};
pub use crate::utils::error::Result;
