//! Transfer Market API
//!
//! Backend for a fantasy team manager. Users register to receive a team
//! with a budget and a generated squad, list their players on a transfer
//! market, and buy listed players from other teams at a discount.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::market::{ListingService, PostgresTransferStore, TransferService};
use infrastructure::player::{PlayerDirectory, PostgresPlayerRepository};
use infrastructure::storage::{self, PostgresConfig};
use infrastructure::team::PostgresTeamRepository;
use infrastructure::user::{Argon2Hasher, PostgresUserRepository, UserService};

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let pg_config = PostgresConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections)
        .with_min_connections(config.database.min_connections)
        .with_connect_timeout(config.database.connect_timeout_secs)
        .with_idle_timeout(config.database.idle_timeout_secs);

    info!("Connecting to PostgreSQL...");
    let pool = storage::connect(&pg_config).await?;
    storage::run_migrations(&pool).await?;
    info!("PostgreSQL connection established");

    let players = Arc::new(PostgresPlayerRepository::new(pool.clone()));
    let teams = Arc::new(PostgresTeamRepository::new(pool.clone()));
    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let transfer_store = Arc::new(PostgresTransferStore::new(pool));

    let directory = Arc::new(PlayerDirectory::new(players.clone()));
    let listing = Arc::new(ListingService::new(players.clone()));
    let transfers = Arc::new(TransferService::new(
        players.clone(),
        teams.clone(),
        transfer_store,
    ));
    let user_service = Arc::new(UserService::new(
        users,
        teams,
        players,
        Arc::new(Argon2Hasher::new()),
    ));

    let jwt = Arc::new(JwtService::new(JwtConfig::new(
        &config.auth.jwt_secret,
        config.auth.jwt_expiration_hours,
    )));

    Ok(AppState::new(
        directory,
        listing,
        transfers,
        user_service,
        jwt,
    ))
}
