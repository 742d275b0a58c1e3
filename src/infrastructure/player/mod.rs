//! Player infrastructure

mod postgres_repository;
mod service;

pub(crate) use postgres_repository::{insert_player, row_to_player};
pub use postgres_repository::PostgresPlayerRepository;
pub use service::PlayerDirectory;
