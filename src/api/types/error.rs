//! API error types with stable machine-readable codes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Stable error codes exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    NotFound,
    ValidationError,
    InvalidId,
    Conflict,
    Forbidden,
    AuthenticationError,
    RosterConstraint,
    PricingError,
    InsufficientFunds,
    NoLongerListed,
    InternalError,
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ValidationError => write!(f, "validation_error"),
            Self::InvalidId => write!(f, "invalid_id"),
            Self::Conflict => write!(f, "conflict"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::AuthenticationError => write!(f, "authentication_error"),
            Self::RosterConstraint => write!(f, "roster_constraint"),
            Self::PricingError => write!(f, "pricing_error"),
            Self::InsufficientFunds => write!(f, "insufficient_funds"),
            Self::NoLongerListed => write!(f, "no_longer_listed"),
            Self::InternalError => write!(f, "internal_error"),
        }
    }
}

/// JSON error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    pub code: ApiErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    code,
                    param: None,
                },
            },
        }
    }

    /// Add parameter info
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorCode::ValidationError, message)
    }

    /// Authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ApiErrorCode::AuthenticationError,
            message,
        )
    }

    /// Permission error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, ApiErrorCode::Forbidden, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorCode::NotFound, message)
    }

    /// Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, ApiErrorCode::Conflict, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorCode::InternalError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::InvalidId { message } => {
                Self::new(StatusCode::BAD_REQUEST, ApiErrorCode::InvalidId, message)
                    .with_param("id")
            }
            DomainError::Conflict { message } => Self::conflict(message),
            DomainError::Forbidden { message } => Self::forbidden(message),
            DomainError::Credential { message } => Self::unauthorized(message),
            DomainError::RosterConstraint { message } => {
                Self::new(StatusCode::FORBIDDEN, ApiErrorCode::RosterConstraint, message)
            }
            DomainError::Pricing { message } => {
                Self::new(StatusCode::FORBIDDEN, ApiErrorCode::PricingError, message)
            }
            DomainError::InsufficientFunds { message } => Self::new(
                StatusCode::FORBIDDEN,
                ApiErrorCode::InsufficientFunds,
                message,
            ),
            DomainError::NoLongerListed { message } => Self::new(
                StatusCode::CONFLICT,
                ApiErrorCode::NoLongerListed,
                format!("{} is no longer listed", message),
            ),
            DomainError::Internal { message } => Self::internal(message),
            DomainError::Storage { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.code, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid asking price");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.code, ApiErrorCode::ValidationError);
        assert_eq!(err.response.error.message, "Invalid asking price");
    }

    #[test]
    fn test_domain_error_conversion() {
        let domain_err = DomainError::not_found("Player not found");
        let api_err: ApiError = domain_err.into();

        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.response.error.code, ApiErrorCode::NotFound);
    }

    #[test]
    fn test_market_error_conversions() {
        let cases = [
            (
                DomainError::roster_constraint("too few players"),
                StatusCode::FORBIDDEN,
                ApiErrorCode::RosterConstraint,
            ),
            (
                DomainError::pricing("no asking price"),
                StatusCode::FORBIDDEN,
                ApiErrorCode::PricingError,
            ),
            (
                DomainError::insufficient_funds("budget too low"),
                StatusCode::FORBIDDEN,
                ApiErrorCode::InsufficientFunds,
            ),
            (
                DomainError::no_longer_listed("Player 'x'"),
                StatusCode::CONFLICT,
                ApiErrorCode::NoLongerListed,
            ),
            (
                DomainError::conflict("email taken"),
                StatusCode::CONFLICT,
                ApiErrorCode::Conflict,
            ),
            (
                DomainError::credential("bad token"),
                StatusCode::UNAUTHORIZED,
                ApiErrorCode::AuthenticationError,
            ),
            (
                DomainError::storage("connection lost"),
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorCode::InternalError,
            ),
        ];

        for (domain_err, status, code) in cases {
            let api_err: ApiError = domain_err.into();
            assert_eq!(api_err.status, status);
            assert_eq!(api_err.response.error.code, code);
        }
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::unauthorized("Invalid token");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("authentication_error"));
        assert!(json.contains("Invalid token"));
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ApiErrorCode::NoLongerListed.to_string(), "no_longer_listed");
        assert_eq!(ApiErrorCode::RosterConstraint.to_string(), "roster_constraint");
    }
}
