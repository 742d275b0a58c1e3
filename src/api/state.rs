//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::market::{ListingService, TransferService};
use crate::infrastructure::player::PlayerDirectory;
use crate::infrastructure::user::UserService;

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<PlayerDirectory>,
    pub listing: Arc<ListingService>,
    pub transfers: Arc<TransferService>,
    pub users: Arc<UserService>,
    pub jwt: Arc<dyn JwtGenerator>,
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        directory: Arc<PlayerDirectory>,
        listing: Arc<ListingService>,
        transfers: Arc<TransferService>,
        users: Arc<UserService>,
        jwt: Arc<dyn JwtGenerator>,
    ) -> Self {
        Self {
            directory,
            listing,
            transfers,
            users,
            jwt,
        }
    }
}
