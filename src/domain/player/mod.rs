//! Player domain module
//!
//! Players are created in bulk when a team registers and change hands on
//! the transfer market. The core never deletes them.

mod entity;
mod repository;
mod validation;

pub use entity::{Player, PlayerId, Position};
pub use repository::{
    Page, PlayerQuery, PlayerRepository, PlayerSortField, SortDirection, DEFAULT_PAGE_SIZE,
};
pub use validation::{
    validate_asking_price, validate_player_id, validate_player_name, PlayerValidationError,
};
