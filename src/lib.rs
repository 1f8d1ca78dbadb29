pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{
    cli::{LocalFileSink, LocalFileSource},
    CliConfig,
};
pub use core::{export::ExportPipeline, ingest::IngestionPipeline};
pub use domain::model::{ExportFormat, FilterState, ParseOutcome, Record, Value};
pub use utils::error::{NdjsonError, Result};
