//! PostgreSQL transfer store
//!
//! The purchase settlement as a single database transaction. The player
//! row is locked with `SELECT ... FOR UPDATE` before the listing flag is
//! re-checked, so of two racing settlements one blocks until the other
//! commits and then observes the cleared flag.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::market::TransferStore;
use crate::domain::player::{Player, PlayerId};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

use super::super::player::row_to_player;

/// PostgreSQL implementation of TransferStore
#[derive(Debug, Clone)]
pub struct PostgresTransferStore {
    pool: PgPool,
}

impl PostgresTransferStore {
    /// Create a new store with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransferStore for PostgresTransferStore {
    async fn settle_purchase(
        &self,
        player_id: &PlayerId,
        buyer_team_id: &TeamId,
        final_price: i64,
    ) -> Result<Player, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        // Lock the player row; the listing re-check below is authoritative.
        let row = sqlx::query("SELECT is_listed, team_id FROM players WHERE id = $1 FOR UPDATE")
            .bind(player_id.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to lock player: {}", e)))?
            .ok_or_else(|| DomainError::not_found(format!("Player '{}' not found", player_id)))?;

        let is_listed: bool = row.get("is_listed");
        if !is_listed {
            // Dropping the transaction rolls it back; no writes happened.
            return Err(DomainError::no_longer_listed(format!(
                "Player '{}'",
                player_id
            )));
        }

        let seller_team_id: Option<String> = row.get("team_id");
        let seller_team_id = seller_team_id.ok_or_else(|| {
            DomainError::not_found(format!("Player '{}' has no owning team", player_id))
        })?;

        sqlx::query(
            r#"
            UPDATE players
            SET team_id = $2, is_listed = FALSE, asking_price = NULL, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(player_id.as_str())
        .bind(buyer_team_id.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to move player: {}", e)))?;

        sqlx::query("UPDATE teams SET budget = budget - $2, updated_at = NOW() WHERE id = $1")
            .bind(buyer_team_id.as_str())
            .bind(final_price)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to debit buyer: {}", e)))?;

        sqlx::query("UPDATE teams SET budget = budget + $2, updated_at = NOW() WHERE id = $1")
            .bind(&seller_team_id)
            .bind(final_price)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to credit seller: {}", e)))?;

        let row = sqlx::query(
            r#"
            SELECT id, name, position, age, nationality, value, rating,
                   team_id, is_listed, asking_price, created_at, updated_at
            FROM players
            WHERE id = $1
            "#,
        )
        .bind(player_id.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to re-read player: {}", e)))?;

        let player = row_to_player(&row)?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit purchase: {}", e)))?;

        Ok(player)
    }
}
