//! PostgreSQL team repository implementation

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::player::Player;
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

use super::super::player::insert_player;

const TEAM_COLUMNS: &str = "id, name, budget, user_id, created_at, updated_at";

fn row_to_team(row: &PgRow) -> Result<Team, DomainError> {
    let id: String = row.get("id");
    let id = TeamId::new(id).map_err(|e| DomainError::storage(format!("Bad team ID: {}", e)))?;

    let user_id: String = row.get("user_id");
    let user_id =
        UserId::new(user_id).map_err(|e| DomainError::storage(format!("Bad user ID: {}", e)))?;

    Ok(Team::from_storage(
        id,
        row.get("name"),
        row.get("budget"),
        user_id,
        row.get("created_at"),
        row.get("updated_at"),
    ))
}

/// PostgreSQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM teams WHERE id = $1", TEAM_COLUMNS))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_team(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_by_user(&self, user_id: &UserId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM teams WHERE user_id = $1",
            TEAM_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get team by user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_team(&row)?)),
            None => Ok(None),
        }
    }

    async fn create_with_squad(
        &self,
        team: Team,
        squad: Vec<Player>,
    ) -> Result<Team, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO teams (id, name, budget, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(team.id().as_str())
        .bind(team.name())
        .bind(team.budget())
        .bind(team.user_id().as_str())
        .bind(team.created_at())
        .bind(team.updated_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!("User '{}' already has a team", team.user_id()))
            } else {
                DomainError::storage(format!("Failed to create team: {}", e))
            }
        })?;

        for player in &squad {
            insert_player(&mut tx, player).await?;
        }

        sqlx::query("UPDATE users SET team_id = $2, updated_at = NOW() WHERE id = $1")
            .bind(team.user_id().as_str())
            .bind(team.id().as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to link user to team: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit team: {}", e)))?;

        Ok(team)
    }
}
