//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::team::TeamId;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

const USER_COLUMNS: &str = "id, email, name, password_hash, team_id, created_at, updated_at";

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let id: String = row.get("id");
    let id = UserId::new(id).map_err(|e| DomainError::storage(format!("Bad user ID: {}", e)))?;

    let team_id: Option<String> = row.get("team_id");
    let team_id = team_id
        .map(TeamId::new)
        .transpose()
        .map_err(|e| DomainError::storage(format!("Bad team ID: {}", e)))?;

    Ok(User::from_storage(
        id,
        row.get("email"),
        row.get("name"),
        row.get("password_hash"),
        team_id,
        row.get("created_at"),
        row.get("updated_at"),
    ))
}

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by email: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, password_hash, team_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id().as_str())
        .bind(user.email())
        .bind(user.name())
        .bind(user.password_hash())
        .bind(user.team_id().map(|t| t.as_str()))
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!("Email '{}' already taken", user.email()))
            } else {
                DomainError::storage(format!("Failed to create user: {}", e))
            }
        })?;

        Ok(user)
    }
}
