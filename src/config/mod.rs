pub mod cli;

use crate::domain::model::ExportFormat;
use crate::utils::validation::{
    validate_file_name, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ndjson-parser")]
#[command(about = "Parse, filter and export NDJSON files")]
pub struct CliConfig {
    /// Path to the NDJSON input file
    pub input: String,

    /// Export format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Override the default export file name (ndjson_export.json / .csv)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Keep only records whose field named KEY matches
    #[arg(long)]
    pub filter_key: Option<String>,

    /// Value the filtered field must equal or contain (case-insensitive)
    #[arg(long)]
    pub filter_value: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output_path", &self.output_path)?;

        if let Some(name) = &self.file_name {
            validate_file_name("file_name", name)?;
        }

        if let Some(key) = &self.filter_key {
            validate_non_empty_string("filter_key", key)?;
        }

        Ok(())
    }
}
