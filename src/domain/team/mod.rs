//! Team domain module
//!
//! Teams own players and a budget. Exactly one team is created per user at
//! registration time.

mod entity;
mod repository;
mod validation;

pub use entity::{Team, TeamId, STARTING_BUDGET};
pub use repository::TeamRepository;
pub use validation::{validate_team_id, validate_team_name, TeamValidationError};
