//! Storage infrastructure: connection pooling and migrations

mod migrations;
mod postgres;

pub use migrations::{market_migrations, run_migrations, Migration, PostgresMigrator};
pub use postgres::{connect, PostgresConfig};
