use crate::utils::error::{NdjsonError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: &str) -> NdjsonError {
    NdjsonError::ConfigError {
        message: format!("{} ({:?}): {}", field_name, value, reason),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Export file names are plain names, not paths; the sink decides where
/// they land.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains('/') || name.contains('\\') {
        return Err(invalid(
            field_name,
            name,
            "File name must not contain path separators",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "./data.ndjson").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("filter_key", "name").is_ok());
        assert!(validate_non_empty_string("filter_key", "   ").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("file_name", "export.json").is_ok());
        assert!(validate_file_name("file_name", "a/b.json").is_err());
        assert!(validate_file_name("file_name", "").is_err());
    }
}
