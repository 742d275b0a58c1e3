//! In-memory market store
//!
//! Single shared state behind one `RwLock`, implementing every repository
//! trait plus the transfer settlement. The write lock spans the whole
//! settlement, which gives the same isolation the relational store gets
//! from row locking: two settlements of the same player are serialized and
//! only the first can observe the listed flag.
//!
//! Used by tests and by local development without a database.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::market::TransferStore;
use crate::domain::player::{Page, Player, PlayerId, PlayerQuery, PlayerRepository, SortDirection};
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct MarketState {
    players: HashMap<String, Player>,
    teams: HashMap<String, Team>,
    users: HashMap<String, User>,
    listing_writes: usize,
}

/// In-memory implementation of the player, team, and user repositories and
/// the transfer store, sharing one state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketStore {
    state: Arc<RwLock<MarketState>>,
}

impl InMemoryMarketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listing writes performed. Lets tests assert that the
    /// idempotent no-op path really skips the write.
    pub fn listing_write_count(&self) -> usize {
        self.state.read().unwrap().listing_writes
    }

    /// Insert a team directly, bypassing registration. Test seam.
    pub fn put_team(&self, team: Team) {
        let mut state = self.state.write().unwrap();
        state.teams.insert(team.id().as_str().to_string(), team);
    }

    /// Insert a player directly, bypassing squad generation. Test seam.
    pub fn put_player(&self, player: Player) {
        let mut state = self.state.write().unwrap();
        state
            .players
            .insert(player.id().as_str().to_string(), player);
    }
}

#[async_trait]
impl PlayerRepository for InMemoryMarketStore {
    async fn get(&self, id: &PlayerId) -> Result<Option<Player>, DomainError> {
        let state = self.state.read().unwrap();
        Ok(state.players.get(id.as_str()).cloned())
    }

    async fn list_by_team(&self, team_id: &TeamId) -> Result<Vec<Player>, DomainError> {
        let state = self.state.read().unwrap();
        Ok(state
            .players
            .values()
            .filter(|p| p.team_id() == Some(team_id))
            .cloned()
            .collect())
    }

    async fn create_many(&self, players: Vec<Player>) -> Result<(), DomainError> {
        let mut state = self.state.write().unwrap();
        for player in players {
            state
                .players
                .insert(player.id().as_str().to_string(), player);
        }
        Ok(())
    }

    async fn update_listing(
        &self,
        id: &PlayerId,
        listed: bool,
        asking_price: Option<i64>,
    ) -> Result<Player, DomainError> {
        let mut state = self.state.write().unwrap();

        let player = state
            .players
            .get_mut(id.as_str())
            .ok_or_else(|| DomainError::not_found(format!("Player '{}' not found", id)))?;

        if listed {
            let price = asking_price.ok_or_else(|| {
                DomainError::pricing("Cannot list a player without an asking price")
            })?;
            player.list_for_sale(price);
        } else {
            player.unlist();
        }

        let updated = player.clone();
        state.listing_writes += 1;
        Ok(updated)
    }

    async fn search(&self, query: &PlayerQuery) -> Result<Page<Player>, DomainError> {
        let state = self.state.read().unwrap();

        let mut matches: Vec<Player> = state
            .players
            .values()
            .filter(|p| p.asking_price().is_some())
            .filter(|p| match query.is_listed {
                Some(listed) => p.is_listed() == listed,
                None => true,
            })
            .filter(|p| match &query.name {
                Some(name) => p.name().to_lowercase().contains(&name.to_lowercase()),
                None => true,
            })
            .filter(|p| match &query.team_name {
                Some(team_name) => {
                    let needle = team_name.to_lowercase();
                    p.team_id()
                        .and_then(|id| state.teams.get(id.as_str()))
                        .map(|t| t.name().to_lowercase().contains(&needle))
                        .unwrap_or(false)
                }
                None => true,
            })
            .cloned()
            .collect();

        // Sort field allow-list only contains the asking price
        matches.sort_by_key(|p| p.asking_price());
        if query.sort_direction == SortDirection::Desc {
            matches.reverse();
        }

        let total = matches.len();
        let items: Vec<Player> = matches
            .into_iter()
            .skip(query.offset())
            .take(query.page_size())
            .collect();

        Ok(Page {
            items,
            page: query.page(),
            page_size: query.page_size(),
            total,
        })
    }
}

#[async_trait]
impl TeamRepository for InMemoryMarketStore {
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let state = self.state.read().unwrap();
        Ok(state.teams.get(id.as_str()).cloned())
    }

    async fn get_by_user(&self, user_id: &UserId) -> Result<Option<Team>, DomainError> {
        let state = self.state.read().unwrap();
        Ok(state
            .teams
            .values()
            .find(|t| t.user_id() == user_id)
            .cloned())
    }

    async fn create_with_squad(
        &self,
        team: Team,
        squad: Vec<Player>,
    ) -> Result<Team, DomainError> {
        let mut state = self.state.write().unwrap();

        if state.teams.contains_key(team.id().as_str()) {
            return Err(DomainError::conflict(format!(
                "Team '{}' already exists",
                team.id()
            )));
        }

        if let Some(user) = state.users.get_mut(team.user_id().as_str()) {
            user.assign_team(team.id().clone());
        }

        for player in squad {
            state
                .players
                .insert(player.id().as_str().to_string(), player);
        }

        state.teams.insert(team.id().as_str().to_string(), team.clone());
        Ok(team)
    }
}

#[async_trait]
impl UserRepository for InMemoryMarketStore {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let state = self.state.read().unwrap();
        Ok(state.users.get(id.as_str()).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let state = self.state.read().unwrap();
        Ok(state.users.values().find(|u| u.email() == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut state = self.state.write().unwrap();

        if state.users.values().any(|u| u.email() == user.email()) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already taken",
                user.email()
            )));
        }

        state.users.insert(user.id().as_str().to_string(), user.clone());
        Ok(user)
    }
}

#[async_trait]
impl TransferStore for InMemoryMarketStore {
    async fn settle_purchase(
        &self,
        player_id: &PlayerId,
        buyer_team_id: &TeamId,
        final_price: i64,
    ) -> Result<Player, DomainError> {
        // One write lock for the whole unit of work; nothing else can
        // observe or mutate market state until it either commits in full
        // or is abandoned by an early return.
        let mut state = self.state.write().unwrap();

        let player = state
            .players
            .get(player_id.as_str())
            .ok_or_else(|| DomainError::not_found(format!("Player '{}' not found", player_id)))?;

        if !player.is_listed() {
            return Err(DomainError::no_longer_listed(format!(
                "Player '{}'",
                player_id
            )));
        }

        let seller_team_id = player
            .team_id()
            .cloned()
            .ok_or_else(|| {
                DomainError::not_found(format!("Player '{}' has no owning team", player_id))
            })?;

        if !state.teams.contains_key(buyer_team_id.as_str()) {
            return Err(DomainError::not_found(format!(
                "Team '{}' not found",
                buyer_team_id
            )));
        }
        if !state.teams.contains_key(seller_team_id.as_str()) {
            return Err(DomainError::not_found(format!(
                "Team '{}' not found",
                seller_team_id
            )));
        }

        let player = state
            .players
            .get_mut(player_id.as_str())
            .ok_or_else(|| DomainError::not_found(format!("Player '{}' not found", player_id)))?;
        player.transfer_to(buyer_team_id.clone());
        let updated = player.clone();

        if let Some(buyer) = state.teams.get_mut(buyer_team_id.as_str()) {
            buyer.adjust_budget(-final_price);
        }
        if let Some(seller) = state.teams.get_mut(seller_team_id.as_str()) {
            seller.adjust_budget(final_price);
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::Position;

    fn team(name: &str) -> Team {
        Team::new(TeamId::generate(), name, UserId::generate()).unwrap()
    }

    fn player(name: &str, team_id: &TeamId) -> Player {
        Player::new(
            PlayerId::generate(),
            name,
            Position::Midfielder,
            24,
            "Norway",
            250_000,
            70,
            team_id.clone(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_settle_purchase_moves_player_and_budgets() {
        let store = InMemoryMarketStore::new();
        let seller = team("Sellers");
        let buyer = team("Buyers");
        let mut p = player("Target", seller.id());
        p.list_for_sale(50_000);

        let seller_id = seller.id().clone();
        let buyer_id = buyer.id().clone();
        let player_id = p.id().clone();

        store.put_team(seller);
        store.put_team(buyer);
        store.put_player(p);

        let updated = store
            .settle_purchase(&player_id, &buyer_id, 47_500)
            .await
            .unwrap();

        assert_eq!(updated.team_id(), Some(&buyer_id));
        assert!(!updated.is_listed());
        assert_eq!(updated.asking_price(), None);

        let buyer_after = TeamRepository::get(&store, &buyer_id).await.unwrap().unwrap();
        let seller_after = TeamRepository::get(&store, &seller_id).await.unwrap().unwrap();
        assert_eq!(buyer_after.budget(), 5_000_000 - 47_500);
        assert_eq!(seller_after.budget(), 5_000_000 + 47_500);
    }

    #[tokio::test]
    async fn test_settle_purchase_of_unlisted_player_fails() {
        let store = InMemoryMarketStore::new();
        let seller = team("Sellers");
        let buyer = team("Buyers");
        let p = player("Target", seller.id());

        let buyer_id = buyer.id().clone();
        let player_id = p.id().clone();

        store.put_team(seller);
        store.put_team(buyer);
        store.put_player(p);

        let result = store.settle_purchase(&player_id, &buyer_id, 47_500).await;
        assert!(matches!(result, Err(DomainError::NoLongerListed { .. })));
    }

    #[tokio::test]
    async fn test_search_excludes_players_without_asking_price() {
        let store = InMemoryMarketStore::new();
        let t = team("Sellers");
        let mut listed = player("Listed", t.id());
        listed.list_for_sale(10_000);
        let unpriced = player("Unpriced", t.id());

        store.put_team(t);
        store.put_player(listed);
        store.put_player(unpriced);

        let page = store.search(&PlayerQuery::new()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name(), "Listed");
    }

    #[tokio::test]
    async fn test_search_filters_by_team_name_case_insensitive() {
        let store = InMemoryMarketStore::new();
        let red = team("Red Dragons");
        let blue = team("Blue Sharks");

        let mut p1 = player("One", red.id());
        p1.list_for_sale(10_000);
        let mut p2 = player("Two", blue.id());
        p2.list_for_sale(20_000);

        store.put_team(red);
        store.put_team(blue);
        store.put_player(p1);
        store.put_player(p2);

        let page = store
            .search(&PlayerQuery::new().with_team_name("dragons"))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name(), "One");
    }

    #[tokio::test]
    async fn test_search_sorts_by_asking_price_desc_by_default() {
        let store = InMemoryMarketStore::new();
        let t = team("Sellers");
        for (name, price) in [("Cheap", 1_000), ("Dear", 90_000), ("Mid", 40_000)] {
            let mut p = player(name, t.id());
            p.list_for_sale(price);
            store.put_player(p);
        }
        store.put_team(t);

        let page = store.search(&PlayerQuery::new()).await.unwrap();
        let names: Vec<&str> = page.items.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Dear", "Mid", "Cheap"]);
    }

    #[tokio::test]
    async fn test_search_paginates() {
        let store = InMemoryMarketStore::new();
        let t = team("Sellers");
        for i in 0..25 {
            let mut p = player(&format!("Player {}", i), t.id());
            p.list_for_sale(1_000 + i);
            store.put_player(p);
        }
        store.put_team(t);

        let page = store
            .search(&PlayerQuery::new().with_page(3).with_page_size(10))
            .await
            .unwrap();
        assert_eq!(page.total, 25);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.page, 3);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = InMemoryMarketStore::new();
        let first = User::new(UserId::generate(), "a@example.com", "A", "hash").unwrap();
        let second = User::new(UserId::generate(), "a@example.com", "B", "hash").unwrap();

        store.create(first).await.unwrap();
        let result = store.create(second).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }
}
