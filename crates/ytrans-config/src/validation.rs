//! Custom validation functions used by the schema attributes.

use validator::ValidationError;
use ytrans_common::logging::is_valid_filter;
use ytrans_i18n::SourceFormat;

/// The root directory must be a non-blank path.
pub fn validate_root_dir(root_dir: &str) -> Result<(), ValidationError> {
    if root_dir.trim().is_empty() {
        return Err(ValidationError::new("empty_root_dir"));
    }
    Ok(())
}

/// Every extension must have a parser.
pub fn validate_extensions(extensions: &[String]) -> Result<(), ValidationError> {
    if extensions
        .iter()
        .all(|extension| SourceFormat::from_extension(extension).is_some())
    {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_extension"))
    }
}

/// Accepts plain levels as well as `EnvFilter` directive strings.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if is_valid_filter(level) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.trim().is_empty() {
        return Err(ValidationError::new("empty_file_path"));
    }

    // Colon stays allowed for Windows drive letters
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_file_path_characters"));
    }

    Ok(())
}
