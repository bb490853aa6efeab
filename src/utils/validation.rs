use crate::utils::error::{FunctionError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Function names follow the hosting platforms' common denominator:
/// 1-64 chars of lowercase letters, digits and hyphens, no edge hyphens.
pub fn validate_function_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.len() > 64 {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Function name must be at most 64 characters".to_string(),
        });
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Function name can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Function name cannot start or end with a hyphen".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FunctionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
