use crate::core::{FileSink, FileSource};
use crate::domain::model::ExportFormat;
use crate::utils::error::{NdjsonError, Result};
use async_trait::async_trait;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Reads whole files from the local filesystem. A missing file maps to
/// "no stream" rather than an error, matching the source contract.
#[derive(Debug, Clone, Default)]
pub struct LocalFileSource;

impl LocalFileSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSource for LocalFileSource {
    async fn open(&self, path: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Writes exports under a base directory. Destinations are always created
/// fresh; an existing file with the same name is a sink failure, never
/// overwritten.
#[derive(Debug, Clone)]
pub struct LocalFileSink {
    base_path: String,
}

impl LocalFileSink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

#[async_trait]
impl FileSink for LocalFileSink {
    async fn save(&self, content: &str, file_name: &str, format: ExportFormat) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(file_name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
            .map_err(|e| NdjsonError::ExportError {
                message: format!("Failed to create {}: {}", full_path.display(), e),
            })?;
        file.write_all(content.as_bytes())?;

        tracing::debug!("wrote {} ({})", full_path.display(), format.mime_type());
        Ok(full_path.display().to_string())
    }
}
