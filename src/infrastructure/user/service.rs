//! User service for registration, authentication, and the team view
//!
//! Registration creates the user account, then builds their team and
//! 20-player squad in one atomic unit of work through the team
//! repository.

use std::sync::Arc;

use tracing::info;

use crate::domain::player::{Player, PlayerRepository};
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::user::{validate_password, User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::squad::generate_squad;

use super::password::PasswordHasher;

/// Request for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Result of a successful registration
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: User,
    pub team: Team,
    pub squad: Vec<Player>,
}

/// A team together with its current roster
#[derive(Debug, Clone)]
pub struct TeamView {
    pub team: Team,
    pub players: Vec<Player>,
}

/// User service for account management
#[derive(Debug)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        teams: Arc<dyn TeamRepository>,
        players: Arc<dyn PlayerRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            teams,
            players,
            hasher,
        }
    }

    /// Register a new user, creating their team and initial squad
    pub async fn register(&self, request: RegisterRequest) -> Result<Registration, DomainError> {
        validate_password(&request.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if self.users.get_by_email(&request.email).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "Email '{}' already taken",
                request.email
            )));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(UserId::generate(), request.email, &request.name, password_hash)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        let mut user = self.users.create(user).await?;

        let team = Team::new(
            TeamId::generate(),
            format!("{}'s Team", request.name),
            user.id().clone(),
        )
        .map_err(|e| DomainError::validation(e.to_string()))?;
        let squad = generate_squad(team.id())?;

        let team = self.teams.create_with_squad(team, squad.clone()).await?;
        user.assign_team(team.id().clone());

        info!(user = %user.id(), team = %team.id(), "Registered user with team and squad");

        Ok(Registration { user, team, squad })
    }

    /// Authenticate a user with email and password
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let user = match self.users.get_by_email(email).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, user.password_hash()) {
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Get a user by ID
    pub async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.users.get(id).await
    }

    /// Get a user's team with its current roster
    pub async fn team_view(&self, user_id: &UserId) -> Result<TeamView, DomainError> {
        let team = self
            .teams
            .get_by_user(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' has no team", user_id)))?;

        let players = self.players.list_by_team(team.id()).await?;

        Ok(TeamView { team, players })
    }
}
