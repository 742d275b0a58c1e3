//! Listing manager
//!
//! Toggles a player's market visibility and asking price, subject to the
//! roster policy.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::player::{validate_asking_price, Player, PlayerId, PlayerRepository};
use crate::domain::team::TeamId;
use crate::domain::{roster, DomainError};

/// Service that lists and unlists players for sale
#[derive(Debug)]
pub struct ListingService {
    players: Arc<dyn PlayerRepository>,
}

impl ListingService {
    pub fn new(players: Arc<dyn PlayerRepository>) -> Self {
        Self { players }
    }

    /// Set a player's listing state.
    ///
    /// Listing requires an asking price and leaves the team with more than
    /// 15 non-listed players; unlisting clears the asking price. Repeating
    /// the current state is a no-op that performs no write.
    pub async fn set_listing(
        &self,
        team_id: &TeamId,
        player_id: &PlayerId,
        asking_price: Option<i64>,
        listed: bool,
    ) -> Result<Player, DomainError> {
        let player = self
            .players
            .get(player_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Player '{}' not found", player_id)))?;

        // The submitting team and the roster-checked team are the same
        // value; a caller listing a player it does not own is rejected.
        let owner = player.team_id().ok_or_else(|| {
            DomainError::not_found(format!("Player '{}' has no owning team", player_id))
        })?;
        if owner != team_id {
            return Err(DomainError::forbidden(format!(
                "Player '{}' does not belong to team '{}'",
                player_id, team_id
            )));
        }

        if player.is_listed() == listed {
            debug!(player = %player_id, listed, "Listing state unchanged, skipping write");
            return Ok(player);
        }

        if listed {
            let price = asking_price.ok_or_else(|| {
                DomainError::pricing("An asking price is required to list a player")
            })?;
            validate_asking_price(price)
                .map_err(|e| DomainError::validation(e.to_string()))?;

            let roster = self.players.list_by_team(owner).await?;
            let unlisted_count = roster.iter().filter(|p| !p.is_listed()).count();

            if !roster::can_list_another(unlisted_count) {
                return Err(DomainError::roster_constraint(format!(
                    "Team must keep at least {} active players",
                    roster::MIN_ACTIVE_PLAYERS
                )));
            }

            let updated = self
                .players
                .update_listing(player_id, true, Some(price))
                .await?;
            info!(player = %player_id, team = %team_id, price, "Player listed for sale");
            Ok(updated)
        } else {
            // Unlisting always clears the price so that an unlisted player
            // never carries a stale asking price.
            let updated = self.players.update_listing(player_id, false, None).await?;
            info!(player = %player_id, team = %team_id, "Player unlisted");
            Ok(updated)
        }
    }
}
