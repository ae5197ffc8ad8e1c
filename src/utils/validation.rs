use crate::utils::error::{MatrixError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_dimension(field_name: &str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        return Err(MatrixError::ConfigError {
            field: field_name.to_string(),
            message: format!("{} is outside the allowed range {}..={}", value, min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatrixError::ConfigError {
            field: field_name.to_string(),
            message: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_search_paths(field_name: &str, paths: &[String]) -> Result<()> {
    for path in paths {
        if path.is_empty() {
            return Err(MatrixError::ConfigError {
                field: field_name.to_string(),
                message: "font path entries cannot be empty".to_string(),
            });
        }
        if path.contains('\0') {
            return Err(MatrixError::ConfigError {
                field: field_name.to_string(),
                message: format!("path {:?} contains null bytes", path),
            });
        }
    }
    Ok(())
}
