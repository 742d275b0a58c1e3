use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid ID format: {message}")]
    InvalidId { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Roster constraint violated: {message}")]
    RosterConstraint { message: String },

    #[error("Pricing error: {message}")]
    Pricing { message: String },

    #[error("Insufficient funds: {message}")]
    InsufficientFunds { message: String },

    #[error("Player is no longer listed: {message}")]
    NoLongerListed { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn roster_constraint(message: impl Into<String>) -> Self {
        Self::RosterConstraint {
            message: message.into(),
        }
    }

    pub fn pricing(message: impl Into<String>) -> Self {
        Self::Pricing {
            message: message.into(),
        }
    }

    pub fn insufficient_funds(message: impl Into<String>) -> Self {
        Self::InsufficientFunds {
            message: message.into(),
        }
    }

    pub fn no_longer_listed(message: impl Into<String>) -> Self {
        Self::NoLongerListed {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
