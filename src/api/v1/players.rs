//! Player market endpoint handlers

use axum::{
    extract::{Path, Query, State},
    Json as AxumJson,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, PlayerListResponse, PlayerResponse, PurchaseResponse};
use crate::domain::player::{PlayerId, PlayerQuery, PlayerSortField, SortDirection};

/// Query parameters for the market listing
#[derive(Debug, Default, Deserialize)]
pub struct PlayersQueryParams {
    pub name: Option<String>,
    pub team_name: Option<String>,
    pub is_listed: Option<bool>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub sort_by: Option<String>,
    pub sort_type: Option<String>,
}

impl PlayersQueryParams {
    fn into_query(self) -> PlayerQuery {
        PlayerQuery {
            name: self.name,
            team_name: self.team_name,
            is_listed: self.is_listed,
            page: self.page,
            page_size: self.limit,
            sort_by: PlayerSortField::resolve(self.sort_by.as_deref()),
            sort_direction: SortDirection::resolve(self.sort_type.as_deref()),
        }
    }
}

/// Request body for listing or unlisting a player
#[derive(Debug, Deserialize)]
pub struct SetListingBody {
    pub is_listed: bool,
    pub asking_price: Option<i64>,
}

/// GET /v1/players
///
/// Search the transfer market. Only players that carry an asking price
/// ever appear here.
pub async fn list_players(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Query(params): Query<PlayersQueryParams>,
) -> Result<AxumJson<PlayerListResponse>, ApiError> {
    debug!(?params, "Searching player market");

    let query = params.into_query();
    let page = state.directory.search(&query).await.map_err(ApiError::from)?;

    Ok(AxumJson(PlayerListResponse::from_page(&page)))
}

/// GET /v1/players/{player_id}
pub async fn get_player(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Path(player_id): Path<String>,
) -> Result<AxumJson<PlayerResponse>, ApiError> {
    let player_id = parse_player_id(&player_id)?;

    let player = state
        .directory
        .get(&player_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Player '{}' not found", player_id)))?;

    Ok(AxumJson(PlayerResponse::from_domain(&player)))
}

/// PUT /v1/players/{player_id}/listing
///
/// List or unlist one of the caller's own players.
pub async fn set_listing(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(player_id): Path<String>,
    Json(body): Json<SetListingBody>,
) -> Result<AxumJson<PlayerResponse>, ApiError> {
    let player_id = parse_player_id(&player_id)?;
    let team_id = user
        .team_id()
        .ok_or_else(|| ApiError::forbidden("User has no team"))?;

    let player = state
        .listing
        .set_listing(team_id, &player_id, body.asking_price, body.is_listed)
        .await
        .map_err(ApiError::from)?;

    Ok(AxumJson(PlayerResponse::from_domain(&player)))
}

/// POST /v1/players/{player_id}/purchase
///
/// Buy a listed player for the caller's team at 95% of the asking price.
pub async fn purchase_player(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(player_id): Path<String>,
) -> Result<AxumJson<PurchaseResponse>, ApiError> {
    let player_id = parse_player_id(&player_id)?;
    let team_id = user
        .team_id()
        .ok_or_else(|| ApiError::forbidden("User has no team"))?;

    let outcome = state
        .transfers
        .purchase(team_id, &player_id)
        .await
        .map_err(ApiError::from)?;

    Ok(AxumJson(PurchaseResponse {
        player: PlayerResponse::from_domain(&outcome.player),
        final_price: outcome.final_price,
    }))
}

fn parse_player_id(raw: &str) -> Result<PlayerId, ApiError> {
    PlayerId::new(raw).map_err(|e| crate::domain::DomainError::invalid_id(e.to_string()).into())
}
