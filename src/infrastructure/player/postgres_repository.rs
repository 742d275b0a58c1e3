//! PostgreSQL player repository implementation

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, QueryBuilder, Row};

use crate::domain::player::{
    Page, Player, PlayerId, PlayerQuery, PlayerRepository, Position,
};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

const PLAYER_COLUMNS: &str = "id, name, position, age, nationality, value, rating, \
                              team_id, is_listed, asking_price, created_at, updated_at";

/// Map a players row to the domain entity
pub(crate) fn row_to_player(row: &PgRow) -> Result<Player, DomainError> {
    let id: String = row.get("id");
    let id = PlayerId::new(id).map_err(|e| DomainError::storage(format!("Bad player ID: {}", e)))?;

    let position: String = row.get("position");
    let position = Position::parse(&position)
        .ok_or_else(|| DomainError::storage(format!("Unknown position '{}'", position)))?;

    let team_id: Option<String> = row.get("team_id");
    let team_id = team_id
        .map(TeamId::new)
        .transpose()
        .map_err(|e| DomainError::storage(format!("Bad team ID: {}", e)))?;

    Ok(Player::from_storage(
        id,
        row.get("name"),
        position,
        row.get("age"),
        row.get("nationality"),
        row.get("value"),
        row.get("rating"),
        team_id,
        row.get("is_listed"),
        row.get("asking_price"),
        row.get("created_at"),
        row.get("updated_at"),
    ))
}

/// PostgreSQL implementation of PlayerRepository
#[derive(Debug, Clone)]
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the market filter clauses shared by the page and count queries.
/// Players without an asking price never appear in market views.
fn push_filters(builder: &mut QueryBuilder<'_, sqlx::Postgres>, query: &PlayerQuery) {
    builder.push(" WHERE p.asking_price IS NOT NULL");

    if let Some(listed) = query.is_listed {
        builder.push(" AND p.is_listed = ").push_bind(listed);
    }
    if let Some(name) = &query.name {
        builder
            .push(" AND p.name ILIKE ")
            .push_bind(format!("%{}%", name));
    }
    if let Some(team_name) = &query.team_name {
        builder
            .push(" AND t.name ILIKE ")
            .push_bind(format!("%{}%", team_name));
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn get(&self, id: &PlayerId) -> Result<Option<Player>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM players WHERE id = $1",
            PLAYER_COLUMNS
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get player: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_player(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_by_team(&self, team_id: &TeamId) -> Result<Vec<Player>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM players WHERE team_id = $1",
            PLAYER_COLUMNS
        ))
        .bind(team_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list team players: {}", e)))?;

        rows.iter().map(row_to_player).collect()
    }

    async fn create_many(&self, players: Vec<Player>) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        for player in &players {
            insert_player(&mut tx, player).await?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit players: {}", e)))?;

        Ok(())
    }

    async fn update_listing(
        &self,
        id: &PlayerId,
        listed: bool,
        asking_price: Option<i64>,
    ) -> Result<Player, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE players
            SET is_listed = $2, asking_price = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PLAYER_COLUMNS
        ))
        .bind(id.as_str())
        .bind(listed)
        .bind(asking_price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update listing: {}", e)))?
        .ok_or_else(|| DomainError::not_found(format!("Player '{}' not found", id)))?;

        row_to_player(&row)
    }

    async fn search(&self, query: &PlayerQuery) -> Result<Page<Player>, DomainError> {
        let mut count_builder = QueryBuilder::new(
            "SELECT COUNT(*) FROM players p LEFT JOIN teams t ON t.id = p.team_id",
        );
        push_filters(&mut count_builder, query);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count players: {}", e)))?;

        let mut builder = QueryBuilder::new(format!(
            "SELECT {} FROM players p LEFT JOIN teams t ON t.id = p.team_id",
            PLAYER_COLUMNS
                .split(", ")
                .map(|c| format!("p.{}", c))
                .collect::<Vec<_>>()
                .join(", ")
        ));
        push_filters(&mut builder, query);

        // Sort field and direction come from fixed enums, never from
        // caller-supplied strings.
        builder.push(format!(
            " ORDER BY p.{} {}",
            query.sort_by.column(),
            query.sort_direction.keyword()
        ));
        builder
            .push(" LIMIT ")
            .push_bind(query.page_size() as i64)
            .push(" OFFSET ")
            .push_bind(query.offset() as i64);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to search players: {}", e)))?;

        let items = rows
            .iter()
            .map(row_to_player)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            page: query.page(),
            page_size: query.page_size(),
            total: total as usize,
        })
    }
}

/// Insert a single player inside an open transaction
pub(crate) async fn insert_player(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    player: &Player,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO players (id, name, position, age, nationality, value, rating,
                             team_id, is_listed, asking_price, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#,
    )
    .bind(player.id().as_str())
    .bind(player.name())
    .bind(player.position().as_str())
    .bind(player.age())
    .bind(player.nationality())
    .bind(player.value())
    .bind(player.rating())
    .bind(player.team_id().map(|t| t.as_str()))
    .bind(player.is_listed())
    .bind(player.asking_price())
    .bind(player.created_at())
    .bind(player.updated_at())
    .execute(&mut **tx)
    .await
    .map_err(|e| DomainError::storage(format!("Failed to insert player: {}", e)))?;

    Ok(())
}
