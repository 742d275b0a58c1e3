//! Player API response types

use serde::Serialize;

use crate::domain::player::{Page, Player};

/// Player response (safe to expose)
#[derive(Debug, Clone, Serialize)]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub position: String,
    pub age: i32,
    pub nationality: String,
    pub value: i64,
    pub rating: i32,
    pub team_id: Option<String>,
    pub is_listed: bool,
    pub asking_price: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl PlayerResponse {
    pub fn from_domain(player: &Player) -> Self {
        Self {
            id: player.id().as_str().to_string(),
            name: player.name().to_string(),
            position: player.position().as_str().to_string(),
            age: player.age(),
            nationality: player.nationality().to_string(),
            value: player.value(),
            rating: player.rating(),
            team_id: player.team_id().map(|t| t.as_str().to_string()),
            is_listed: player.is_listed(),
            asking_price: player.asking_price(),
            created_at: player.created_at().to_rfc3339(),
            updated_at: player.updated_at().to_rfc3339(),
        }
    }
}

/// Paginated list of players
#[derive(Debug, Serialize)]
pub struct PlayerListResponse {
    pub players: Vec<PlayerResponse>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
}

impl PlayerListResponse {
    pub fn from_page(page: &Page<Player>) -> Self {
        Self {
            players: page.items.iter().map(PlayerResponse::from_domain).collect(),
            page: page.page,
            limit: page.page_size,
            total: page.total,
        }
    }
}

/// Result of a completed transfer
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub player: PlayerResponse,
    pub final_price: i64,
}
