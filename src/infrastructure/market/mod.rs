//! Market infrastructure
//!
//! The listing manager and transfer engine services, plus the PostgreSQL
//! and in-memory transfer stores.

mod in_memory;
mod listing_service;
mod postgres_store;
mod transfer_service;

pub use in_memory::InMemoryMarketStore;
pub use listing_service::ListingService;
pub use postgres_store::PostgresTransferStore;
pub use transfer_service::TransferService;
