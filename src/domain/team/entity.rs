//! Team entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_team_id, validate_team_name, TeamValidationError};
use crate::domain::user::UserId;

/// Budget every newly registered team starts with
pub const STARTING_BUDGET: i64 = 5_000_000;

/// Team identifier - a UUID string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamId(String);

impl TeamId {
    /// Create a new TeamId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, TeamValidationError> {
        let id = id.into();
        validate_team_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh random TeamId
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamId {
    type Error = TeamValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team entity
///
/// One user owns at most one team, enforced at registration. The budget is
/// mutated only by the transfer engine's atomic unit of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    id: TeamId,
    /// Display name
    name: String,
    /// Spendable currency balance
    budget: i64,
    /// Owning user
    user_id: UserId,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new team with the starting budget
    pub fn new(
        id: TeamId,
        name: impl Into<String>,
        user_id: UserId,
    ) -> Result<Self, TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;
        let now = Utc::now();

        Ok(Self {
            id,
            name,
            budget: STARTING_BUDGET,
            user_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate a team from storage without re-validating
    pub fn from_storage(
        id: TeamId,
        name: String,
        budget: i64,
        user_id: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            budget,
            user_id,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn budget(&self) -> i64 {
        self.budget
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply a budget delta. Used only by the in-memory store's settlement
    /// path; the relational store adjusts budgets in SQL.
    pub fn adjust_budget(&mut self, delta: i64) {
        self.budget += delta;
        self.updated_at = Utc::now();
    }
}
