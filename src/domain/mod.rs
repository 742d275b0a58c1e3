//! Domain layer - Core business logic and entities

pub mod error;
pub mod market;
pub mod player;
pub mod roster;
pub mod team;
pub mod user;

pub use error::DomainError;
pub use market::{final_sale_price, PurchaseOutcome, TransferStore};
pub use player::{Page, Player, PlayerId, PlayerQuery, PlayerRepository, Position};
pub use team::{Team, TeamId, TeamRepository};
pub use user::{User, UserId, UserRepository};
