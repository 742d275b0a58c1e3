//! Player validation

use thiserror::Error;

/// Errors that can occur during player validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlayerValidationError {
    #[error("Player ID cannot be empty")]
    EmptyId,

    #[error("Player ID must be a valid UUID")]
    InvalidId,

    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("Player name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Player age must be between {0} and {1}")]
    AgeOutOfRange(i32, i32),

    #[error("Player rating must be between {0} and {1}")]
    RatingOutOfRange(i32, i32),

    #[error("Asking price must be positive")]
    NonPositiveAskingPrice,
}

const MAX_PLAYER_NAME_LENGTH: usize = 100;
const MIN_PLAYER_AGE: i32 = 16;
const MAX_PLAYER_AGE: i32 = 50;
const MIN_PLAYER_RATING: i32 = 0;
const MAX_PLAYER_RATING: i32 = 99;

/// Validate a player ID
pub fn validate_player_id(id: &str) -> Result<(), PlayerValidationError> {
    if id.is_empty() {
        return Err(PlayerValidationError::EmptyId);
    }

    if uuid::Uuid::parse_str(id).is_err() {
        return Err(PlayerValidationError::InvalidId);
    }

    Ok(())
}

/// Validate a player name
pub fn validate_player_name(name: &str) -> Result<(), PlayerValidationError> {
    if name.trim().is_empty() {
        return Err(PlayerValidationError::EmptyName);
    }

    if name.len() > MAX_PLAYER_NAME_LENGTH {
        return Err(PlayerValidationError::NameTooLong(MAX_PLAYER_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a player age
pub fn validate_player_age(age: i32) -> Result<(), PlayerValidationError> {
    if !(MIN_PLAYER_AGE..=MAX_PLAYER_AGE).contains(&age) {
        return Err(PlayerValidationError::AgeOutOfRange(
            MIN_PLAYER_AGE,
            MAX_PLAYER_AGE,
        ));
    }

    Ok(())
}

/// Validate a player rating
pub fn validate_player_rating(rating: i32) -> Result<(), PlayerValidationError> {
    if !(MIN_PLAYER_RATING..=MAX_PLAYER_RATING).contains(&rating) {
        return Err(PlayerValidationError::RatingOutOfRange(
            MIN_PLAYER_RATING,
            MAX_PLAYER_RATING,
        ));
    }

    Ok(())
}

/// Validate an asking price
pub fn validate_asking_price(price: i64) -> Result<(), PlayerValidationError> {
    if price <= 0 {
        return Err(PlayerValidationError::NonPositiveAskingPrice);
    }

    Ok(())
}
