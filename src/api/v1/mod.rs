//! Transfer market v1 API endpoints

pub mod players;
pub mod teams;

use axum::{
    routing::{get, post, put},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/players", get(players::list_players))
        .route("/players/{player_id}", get(players::get_player))
        .route("/players/{player_id}/listing", put(players::set_listing))
        .route(
            "/players/{player_id}/purchase",
            post(players::purchase_player),
        )
        .route("/teams/me", get(teams::get_my_team))
}
