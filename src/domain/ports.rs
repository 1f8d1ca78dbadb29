use crate::domain::model::ExportFormat;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source collaborator: opens a readable byte stream for an opaque file
/// reference. `Ok(None)` means no stream could be opened; ingestion treats
/// that the same as an empty file.
#[async_trait]
pub trait FileSource: Send + Sync {
    async fn open(&self, path: &str) -> Result<Option<Vec<u8>>>;
}

/// Sink collaborator: writes content to a new named destination and returns
/// an opaque handle to it. Each save creates a new destination; the core
/// never overwrites or appends.
#[async_trait]
pub trait FileSink: Send + Sync {
    async fn save(&self, content: &str, file_name: &str, format: ExportFormat) -> Result<String>;
}
