//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_email, validate_user_id, validate_user_name, UserValidationError};
use crate::domain::team::TeamId;

/// User identifier - a UUID string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh random UserId
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User account entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    id: UserId,
    /// Login email, unique across users
    email: String,
    /// Display name
    name: String,
    /// Argon2 password hash, never the plaintext
    #[serde(skip_serializing)]
    password_hash: String,
    /// The user's team; set once registration completes
    team_id: Option<TeamId>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user without a team yet
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let email = email.into();
        let name = name.into();
        validate_email(&email)?;
        validate_user_name(&name)?;
        let now = Utc::now();

        Ok(Self {
            id,
            email,
            name,
            password_hash: password_hash.into(),
            team_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate a user from storage without re-validating
    pub fn from_storage(
        id: UserId,
        email: String,
        name: String,
        password_hash: String,
        team_id: Option<TeamId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            password_hash,
            team_id,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn team_id(&self) -> Option<&TeamId> {
        self.team_id.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Link the user to their team
    pub fn assign_team(&mut self, team_id: TeamId) {
        self.team_id = Some(team_id);
        self.updated_at = Utc::now();
    }
}
