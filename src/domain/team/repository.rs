//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamId};
use crate::domain::player::Player;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository for managing teams
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Get the team owned by a user
    async fn get_by_user(&self, user_id: &UserId) -> Result<Option<Team>, DomainError>;

    /// Create a team together with its initial squad, and link the owning
    /// user to it. All writes commit together or not at all.
    async fn create_with_squad(
        &self,
        team: Team,
        squad: Vec<Player>,
    ) -> Result<Team, DomainError>;
}
