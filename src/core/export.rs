use crate::core::{csv, json};
use crate::domain::model::{ExportFormat, Record};
use crate::domain::ports::FileSink;
use crate::utils::error::Result;

/// Serializes records in the requested format and hands the content to the
/// sink collaborator. Sink failures surface as-is; there is no retry.
pub struct ExportPipeline<K: FileSink> {
    sink: K,
}

impl<K: FileSink> ExportPipeline<K> {
    pub fn new(sink: K) -> Self {
        Self { sink }
    }

    pub async fn run(
        &self,
        records: &[Record],
        format: ExportFormat,
        file_name: Option<&str>,
    ) -> Result<String> {
        let content = match format {
            ExportFormat::Json => json::to_json(records),
            ExportFormat::Csv => csv::to_csv(records)?,
        };

        let file_name = match file_name {
            Some(name) => name.to_string(),
            None => format.default_file_name(),
        };

        tracing::debug!(
            "exporting {} records, {} bytes to {} ({})",
            records.len(),
            content.len(),
            file_name,
            format.mime_type()
        );

        self.sink.save(&content, &file_name, format).await
    }
}
