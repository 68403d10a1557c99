//! # Validation Utilities
//!
//! Input checks applied before a request is sent.

/// Validate that a field is present and not blank.
pub fn validate_required(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field_name))
    } else {
        Ok(())
    }
}

/// Validate a character count within `min..=max`.
pub fn validate_length(value: &str, min: usize, max: usize, field_name: &str) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else if len > max {
        Err(format!("{} must be at most {} characters", field_name, max))
    } else {
        Ok(())
    }
}

/// Carrier tracking numbers: 5 to 40 ASCII letters, digits or dashes.
pub fn validate_tracking_number(value: &str) -> Result<(), String> {
    let value = value.trim();
    validate_length(value, 5, 40, "Tracking number")?;

    if value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        Ok(())
    } else {
        Err("Tracking number may only contain letters, digits and '-'".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("alice", "Username").is_ok());
        assert_eq!(
            validate_required("   ", "Username"),
            Err("Username is required".to_string())
        );
    }

    #[test]
    fn test_validate_length_counts_chars() {
        assert!(validate_length("密码密码密码", 6, 32, "Password").is_ok());
        assert!(validate_length("abc", 6, 32, "Password").is_err());
    }

    #[test]
    fn test_validate_tracking_number() {
        assert!(validate_tracking_number("YT2412345678901234").is_ok());
        assert!(validate_tracking_number(" LX-123456 ").is_ok());
        assert!(validate_tracking_number("12 34 56").is_err());
        assert!(validate_tracking_number("123").is_err());
    }
}
