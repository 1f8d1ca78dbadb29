use crate::core::parser;
use crate::domain::model::ParseOutcome;
use crate::domain::ports::FileSource;

/// Opens the input stream through the source collaborator and delegates to
/// the line parser. Stream-level failures (open errors, invalid encoding)
/// supersede any partial results; per-line failures are the parser's
/// business.
pub struct IngestionPipeline<S: FileSource> {
    source: S,
}

impl<S: FileSource> IngestionPipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn run(&self, path: &str) -> ParseOutcome {
        tracing::debug!("opening input: {}", path);

        let bytes = match self.source.open(path).await {
            Ok(Some(bytes)) => bytes,
            // No stream is indistinguishable from an empty file.
            Ok(None) => return parser::parse_text(""),
            Err(e) => return ParseOutcome::Error(format!("Error reading file: {}", e)),
        };

        match String::from_utf8(bytes) {
            Ok(text) => parser::parse_text(&text),
            Err(e) => ParseOutcome::Error(format!("Error reading file: {}", e)),
        }
    }
}
