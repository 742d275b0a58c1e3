//! Authentication API endpoints
//!
//! Registration creates the account together with its team and squad.
//! Login returns a JWT for the market endpoints.

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, TeamResponse, TeamViewResponse};
use crate::infrastructure::user::RegisterRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_current_user))
}

/// Registration request body
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterBody {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
    pub expires_at: String,
}

/// Registration response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub token: String,
    pub user: UserResponse,
    pub team: TeamResponse,
    pub expires_at: String,
}

/// User response (safe to expose)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub team_id: Option<String>,
    pub created_at: String,
}

impl UserResponse {
    fn from_user(user: &crate::domain::user::User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            email: user.email().to_string(),
            name: user.name().to_string(),
            team_id: user.team_id().map(|t| t.as_str().to_string()),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

/// Register a new user
///
/// POST /auth/register
///
/// Creates the account, a team named after the user, and its initial
/// 20-player squad. Returns a JWT so the client is logged in right away.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<Json<RegisterResponse>, ApiError> {
    body.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let registration = state
        .users
        .register(RegisterRequest {
            email: body.email,
            name: body.name,
            password: body.password,
        })
        .await
        .map_err(ApiError::from)?;

    let token = state
        .jwt
        .generate(&registration.user)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let expires_at = Utc::now() + Duration::hours(state.jwt.expiration_hours() as i64);

    Ok(Json(RegisterResponse {
        token,
        user: UserResponse::from_user(&registration.user),
        team: TeamResponse::from_domain(&registration.team),
        expires_at: expires_at.to_rfc3339(),
    }))
}

/// Login with email and password
///
/// POST /auth/login
///
/// Returns a JWT token on successful authentication.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .users
        .authenticate(&request.email, &request.password)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    let token = state
        .jwt
        .generate(&user)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let expires_at = Utc::now() + Duration::hours(state.jwt.expiration_hours() as i64);

    Ok(Json(LoginResponse {
        token,
        user: UserResponse::from_user(&user),
        expires_at: expires_at.to_rfc3339(),
    }))
}

/// Get current authenticated user with their team and roster
///
/// GET /auth/me
pub async fn get_current_user(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<MeResponse>, ApiError> {
    let view = state
        .users
        .team_view(user.id())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(MeResponse {
        user: UserResponse::from_user(&user),
        team: TeamViewResponse::new(&view.team, &view.players),
    }))
}

/// Current user response
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
    pub team: TeamViewResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_body_validation() {
        let valid = RegisterBody {
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            password: "password1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterBody {
            email: "not-an-email".to_string(),
            name: "Alice".to_string(),
            password: "password1".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterBody {
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());
    }
}
