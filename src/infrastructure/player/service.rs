//! Player directory service
//!
//! Read path over the market: faithful translation of filter, sort, and
//! pagination parameters. Owns no invariants.

use std::sync::Arc;

use crate::domain::player::{Page, Player, PlayerId, PlayerQuery, PlayerRepository};
use crate::domain::DomainError;

/// Read-only query service over players
#[derive(Debug)]
pub struct PlayerDirectory {
    players: Arc<dyn PlayerRepository>,
}

impl PlayerDirectory {
    pub fn new(players: Arc<dyn PlayerRepository>) -> Self {
        Self { players }
    }

    /// Get a player by ID
    pub async fn get(&self, id: &PlayerId) -> Result<Option<Player>, DomainError> {
        self.players.get(id).await
    }

    /// Search the market
    pub async fn search(&self, query: &PlayerQuery) -> Result<Page<Player>, DomainError> {
        self.players.search(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::Position;
    use crate::domain::team::{Team, TeamId};
    use crate::domain::user::UserId;
    use crate::infrastructure::market::InMemoryMarketStore;

    fn fixture() -> (PlayerDirectory, InMemoryMarketStore, TeamId) {
        let store = InMemoryMarketStore::new();
        let team = Team::new(TeamId::generate(), "Fixture FC", UserId::generate()).unwrap();
        let team_id = team.id().clone();
        store.put_team(team);
        let directory = PlayerDirectory::new(Arc::new(store.clone()));
        (directory, store, team_id)
    }

    fn listed_player(store: &InMemoryMarketStore, name: &str, team_id: &TeamId, price: i64) {
        let mut player = Player::new(
            PlayerId::generate(),
            name,
            Position::Defender,
            28,
            "Italy",
            150_000,
            65,
            team_id.clone(),
        )
        .unwrap();
        player.list_for_sale(price);
        store.put_player(player);
    }

    #[tokio::test]
    async fn test_name_filter_is_case_insensitive_substring() {
        let (directory, store, team_id) = fixture();
        listed_player(&store, "Marco Verdi", &team_id, 10_000);
        listed_player(&store, "Luigi Rossi", &team_id, 20_000);

        let page = directory
            .search(&PlayerQuery::new().with_name("VERDI"))
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name(), "Marco Verdi");
    }

    #[tokio::test]
    async fn test_listed_filter() {
        let (directory, store, team_id) = fixture();
        listed_player(&store, "On Sale", &team_id, 10_000);

        let listed = directory
            .search(&PlayerQuery::new().with_listed(true))
            .await
            .unwrap();
        let unlisted = directory
            .search(&PlayerQuery::new().with_listed(false))
            .await
            .unwrap();

        assert_eq!(listed.total, 1);
        assert_eq!(unlisted.total, 0);
    }
}
