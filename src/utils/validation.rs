use crate::utils::error::{Result, ShowcaseError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects exactly the empty string. Whitespace is a legitimate value.
pub fn validate_not_empty(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ShowcaseError::EmptyValueError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShowcaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(ShowcaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List must contain at least one element".to_string(),
        });
    }
    Ok(())
}

pub fn validate_exact_len<T: std::fmt::Debug>(
    field_name: &str,
    values: &[T],
    expected: usize,
) -> Result<()> {
    if values.len() != expected {
        return Err(ShowcaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", values),
            reason: format!("Expected exactly {} elements, got {}", expected, values.len()),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ShowcaseError::MissingFieldError {
        field: field_name.to_string(),
    })
}
