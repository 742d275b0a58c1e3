//! User validation

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID must be a valid UUID")]
    InvalidId,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Password must contain at least one letter and one digit")]
    PasswordTooWeak,
}

const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a user ID
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    if uuid::Uuid::parse_str(id).is_err() {
        return Err(UserValidationError::InvalidId);
    }

    Ok(())
}

/// Validate an email address. A light structural check; full RFC parsing
/// is left to the HTTP request shapes.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(UserValidationError::InvalidEmail);
    };

    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a display name
pub fn validate_user_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    Ok(())
}

/// Validate a plaintext password before hashing
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_letter || !has_digit {
        return Err(UserValidationError::PasswordTooWeak);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("alice@example.com").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert_eq!(validate_email("alice"), Err(UserValidationError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(UserValidationError::InvalidEmail));
        assert_eq!(validate_email("alice@localhost"), Err(UserValidationError::InvalidEmail));
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("password1").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            validate_password("pass1"),
            Err(UserValidationError::PasswordTooShort(8))
        );
    }

    #[test]
    fn test_password_too_weak() {
        assert_eq!(
            validate_password("passwords"),
            Err(UserValidationError::PasswordTooWeak)
        );
        assert_eq!(
            validate_password("12345678"),
            Err(UserValidationError::PasswordTooWeak)
        );
    }
}
