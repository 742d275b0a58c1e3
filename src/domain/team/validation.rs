//! Team validation

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team ID cannot be empty")]
    EmptyId,

    #[error("Team ID must be a valid UUID")]
    InvalidId,

    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team name cannot exceed {0} characters")]
    NameTooLong(usize),
}

const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Validate a team ID
pub fn validate_team_id(id: &str) -> Result<(), TeamValidationError> {
    if id.is_empty() {
        return Err(TeamValidationError::EmptyId);
    }

    if uuid::Uuid::parse_str(id).is_err() {
        return Err(TeamValidationError::InvalidId);
    }

    Ok(())
}

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.trim().is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if name.len() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_id() {
        assert!(validate_team_id("6c8f9c6e-5bcd-4a7e-b70e-1d7c0a3f9f11").is_ok());
    }

    #[test]
    fn test_empty_team_id() {
        assert_eq!(validate_team_id(""), Err(TeamValidationError::EmptyId));
    }

    #[test]
    fn test_invalid_team_id() {
        assert_eq!(
            validate_team_id("my-team"),
            Err(TeamValidationError::InvalidId)
        );
    }

    #[test]
    fn test_valid_team_name() {
        assert!(validate_team_name("Alice's Team").is_ok());
    }

    #[test]
    fn test_empty_team_name() {
        assert_eq!(validate_team_name(" "), Err(TeamValidationError::EmptyName));
    }

    #[test]
    fn test_team_name_too_long() {
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_team_name(&long_name),
            Err(TeamValidationError::NameTooLong(100))
        );
    }
}
