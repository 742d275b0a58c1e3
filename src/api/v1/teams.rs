//! Team endpoint handlers

use axum::{extract::State, Json as AxumJson};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, TeamViewResponse};

/// GET /v1/teams/me
///
/// The caller's team with its full roster, including unlisted players.
pub async fn get_my_team(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<AxumJson<TeamViewResponse>, ApiError> {
    let view = state
        .users
        .team_view(user.id())
        .await
        .map_err(ApiError::from)?;

    Ok(AxumJson(TeamViewResponse::new(&view.team, &view.players)))
}
