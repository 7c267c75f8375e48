use crate::utils::error::{BenchError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_input_file(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if !Path::new(path).is_file() {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File does not exist or is not readable".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.contains('\0') {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("log_file", "run.log").is_ok());
        assert!(validate_non_empty_string("log_file", "").is_err());
        assert!(validate_non_empty_string("log_file", "   ").is_err());
    }

    #[test]
    fn test_validate_input_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_input_file("test_file", file.path().to_str().unwrap()).is_ok());
        assert!(validate_input_file("test_file", "/no/such/file.txt").is_err());
        assert!(validate_input_file("test_file", "").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }
}
