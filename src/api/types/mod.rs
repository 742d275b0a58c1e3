//! API request and response types

pub mod error;
pub mod json;
pub mod player;
pub mod team;

pub use error::{ApiError, ApiErrorCode, ApiErrorResponse};
pub use json::Json;
pub use player::{PlayerListResponse, PlayerResponse, PurchaseResponse};
pub use team::{TeamResponse, TeamViewResponse};
