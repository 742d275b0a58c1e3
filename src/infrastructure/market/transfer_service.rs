//! Transfer engine
//!
//! The purchase protocol: advisory pre-checks against current state, then
//! an atomic settlement delegated to the transfer store. The pre-checks
//! are an optimization; the authoritative double-sale guard is the
//! listing re-check the store performs under isolation.

use std::sync::Arc;

use tracing::info;

use crate::domain::market::{final_sale_price, PurchaseOutcome, TransferStore};
use crate::domain::player::{PlayerId, PlayerRepository};
use crate::domain::team::{TeamId, TeamRepository};
use crate::domain::{roster, DomainError};

/// Service that executes player purchases across team boundaries
#[derive(Debug)]
pub struct TransferService {
    players: Arc<dyn PlayerRepository>,
    teams: Arc<dyn TeamRepository>,
    store: Arc<dyn TransferStore>,
}

impl TransferService {
    pub fn new(
        players: Arc<dyn PlayerRepository>,
        teams: Arc<dyn TeamRepository>,
        store: Arc<dyn TransferStore>,
    ) -> Self {
        Self {
            players,
            teams,
            store,
        }
    }

    /// Purchase a listed player for the buying team.
    ///
    /// On success the player belongs to the buyer and is no longer listed,
    /// the buyer's budget is debited by the discounted price and the
    /// seller's credited by exactly the same amount. A failed purchase
    /// leaves all records untouched; the service never retries.
    pub async fn purchase(
        &self,
        buyer_team_id: &TeamId,
        player_id: &PlayerId,
    ) -> Result<PurchaseOutcome, DomainError> {
        let buyer_roster = self.players.list_by_team(buyer_team_id).await?;
        if !roster::can_receive(buyer_roster.len()) {
            return Err(DomainError::roster_constraint(format!(
                "Player limit exceeded: a team cannot have more than {} players",
                roster::MAX_SQUAD_SIZE
            )));
        }

        let player = self
            .players
            .get(player_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Player '{}' not found", player_id)))?;

        let seller_team_id = player.team_id().ok_or_else(|| {
            DomainError::not_found(format!("Player '{}' has no owning team", player_id))
        })?;
        self.teams
            .get(seller_team_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", seller_team_id)))?;

        let buyer = self
            .teams
            .get(buyer_team_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", buyer_team_id)))?;

        let asking_price = player
            .asking_price()
            .ok_or_else(|| DomainError::pricing(format!("Player '{}' has no asking price", player_id)))?;

        if asking_price > buyer.budget() {
            return Err(DomainError::insufficient_funds(format!(
                "Asking price {} exceeds budget {}",
                asking_price,
                buyer.budget()
            )));
        }

        let final_price = final_sale_price(asking_price);

        // Atomic unit of work: the store re-checks the listing flag under
        // isolation and either commits every write or none of them.
        let player = self
            .store
            .settle_purchase(player_id, buyer_team_id, final_price)
            .await?;

        info!(
            player = %player_id,
            buyer = %buyer_team_id,
            seller = %seller_team_id,
            final_price,
            "Player purchased"
        );

        Ok(PurchaseOutcome {
            player,
            final_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::{Player, Position};
    use crate::domain::team::{Team, STARTING_BUDGET};
    use crate::domain::user::UserId;
    use crate::infrastructure::market::InMemoryMarketStore;

    struct Fixture {
        service: TransferService,
        store: InMemoryMarketStore,
        seller_id: TeamId,
        buyer_id: TeamId,
    }

    fn new_player(name: &str, team_id: &TeamId) -> Player {
        Player::new(
            PlayerId::generate(),
            name,
            Position::Attacker,
            26,
            "Brazil",
            300_000,
            85,
            team_id.clone(),
        )
        .unwrap()
    }

    fn fixture(buyer_roster_size: usize) -> Fixture {
        let store = InMemoryMarketStore::new();

        let seller = Team::new(TeamId::generate(), "Sellers", UserId::generate()).unwrap();
        let buyer = Team::new(TeamId::generate(), "Buyers", UserId::generate()).unwrap();
        let seller_id = seller.id().clone();
        let buyer_id = buyer.id().clone();
        store.put_team(seller);
        store.put_team(buyer);

        for i in 0..buyer_roster_size {
            store.put_player(new_player(&format!("Buyer Player {}", i), &buyer_id));
        }

        let repo = Arc::new(store.clone());
        let service = TransferService::new(repo.clone(), repo.clone(), repo);
        Fixture {
            service,
            store,
            seller_id,
            buyer_id,
        }
    }

    fn listed_player(f: &Fixture, asking_price: i64) -> PlayerId {
        let mut player = new_player("Target", &f.seller_id);
        player.list_for_sale(asking_price);
        let id = player.id().clone();
        f.store.put_player(player);
        id
    }

    async fn team_budget(f: &Fixture, id: &TeamId) -> i64 {
        TeamRepository::get(&f.store, id).await.unwrap().unwrap().budget()
    }

    #[tokio::test]
    async fn test_purchase_moves_player_and_settles_budgets() {
        let f = fixture(10);
        let player_id = listed_player(&f, 50_000);

        let outcome = f.service.purchase(&f.buyer_id, &player_id).await.unwrap();

        assert_eq!(outcome.final_price, 47_500);
        assert_eq!(outcome.player.team_id(), Some(&f.buyer_id));
        assert!(!outcome.player.is_listed());
        assert_eq!(outcome.player.asking_price(), None);

        assert_eq!(team_budget(&f, &f.buyer_id).await, STARTING_BUDGET - 47_500);
        assert_eq!(team_budget(&f, &f.seller_id).await, STARTING_BUDGET + 47_500);
    }

    #[tokio::test]
    async fn test_final_price_rounds_down() {
        let f = fixture(10);
        let player_id = listed_player(&f, 12_345);

        let outcome = f.service.purchase(&f.buyer_id, &player_id).await.unwrap();

        // floor(12345 * 0.95) = floor(11727.75)
        assert_eq!(outcome.final_price, 11_727);
    }

    #[tokio::test]
    async fn test_budget_sum_is_conserved() {
        let f = fixture(10);
        let player_id = listed_player(&f, 123_457);

        let before =
            team_budget(&f, &f.buyer_id).await + team_budget(&f, &f.seller_id).await;
        f.service.purchase(&f.buyer_id, &player_id).await.unwrap();
        let after = team_budget(&f, &f.buyer_id).await + team_budget(&f, &f.seller_id).await;

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_roster_ceiling_rejects_before_any_budget_mutation() {
        let f = fixture(25);
        let player_id = listed_player(&f, 50_000);

        let result = f.service.purchase(&f.buyer_id, &player_id).await;

        assert!(matches!(result, Err(DomainError::RosterConstraint { .. })));
        assert_eq!(team_budget(&f, &f.buyer_id).await, STARTING_BUDGET);
        assert_eq!(team_budget(&f, &f.seller_id).await, STARTING_BUDGET);
    }

    #[tokio::test]
    async fn test_unknown_player_not_found() {
        let f = fixture(10);

        let result = f.service.purchase(&f.buyer_id, &PlayerId::generate()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_unknown_buyer_team_not_found() {
        let f = fixture(10);
        let player_id = listed_player(&f, 50_000);

        let result = f.service.purchase(&TeamId::generate(), &player_id).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_player_without_asking_price_is_a_pricing_error() {
        let f = fixture(10);
        let player = new_player("Unlisted", &f.seller_id);
        let player_id = player.id().clone();
        f.store.put_player(player);

        let result = f.service.purchase(&f.buyer_id, &player_id).await;
        assert!(matches!(result, Err(DomainError::Pricing { .. })));
    }

    #[tokio::test]
    async fn test_asking_price_over_budget_is_insufficient_funds() {
        let f = fixture(10);
        let player_id = listed_player(&f, STARTING_BUDGET + 1);

        let result = f.service.purchase(&f.buyer_id, &player_id).await;
        assert!(matches!(result, Err(DomainError::InsufficientFunds { .. })));
        assert_eq!(team_budget(&f, &f.buyer_id).await, STARTING_BUDGET);
    }

    /// Transfer store decorator that holds every settlement at a barrier.
    /// Both racing purchases pass their pre-checks and reach the atomic
    /// unit before either commits, which is the interleaving the listing
    /// re-check exists to defend against.
    #[derive(Debug)]
    struct BarrierStore {
        inner: InMemoryMarketStore,
        barrier: Arc<tokio::sync::Barrier>,
    }

    #[async_trait::async_trait]
    impl TransferStore for BarrierStore {
        async fn settle_purchase(
            &self,
            player_id: &PlayerId,
            buyer_team_id: &TeamId,
            final_price: i64,
        ) -> Result<crate::domain::player::Player, DomainError> {
            self.barrier.wait().await;
            self.inner
                .settle_purchase(player_id, buyer_team_id, final_price)
                .await
        }
    }

    #[tokio::test]
    async fn test_concurrent_purchases_have_exactly_one_winner() {
        let f = fixture(0);
        let other_buyer = Team::new(TeamId::generate(), "Rivals", UserId::generate()).unwrap();
        let other_buyer_id = other_buyer.id().clone();
        f.store.put_team(other_buyer);

        let player_id = listed_player(&f, 50_000);

        let repo = Arc::new(f.store.clone());
        let barrier = Arc::new(tokio::sync::Barrier::new(2));
        let store = Arc::new(BarrierStore {
            inner: f.store.clone(),
            barrier,
        });
        let service_a = Arc::new(TransferService::new(repo.clone(), repo.clone(), store.clone()));
        let service_b = Arc::new(TransferService::new(repo.clone(), repo.clone(), store));

        let buyer_a = f.buyer_id.clone();
        let buyer_b = other_buyer_id.clone();
        let pid_a = player_id.clone();
        let pid_b = player_id.clone();

        let task_a = tokio::spawn(async move { service_a.purchase(&buyer_a, &pid_a).await });
        let task_b = tokio::spawn(async move { service_b.purchase(&buyer_b, &pid_b).await });

        let result_a = task_a.await.unwrap();
        let result_b = task_b.await.unwrap();

        let successes = [&result_a, &result_b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1, "exactly one purchase must win");

        let loser = if result_a.is_ok() { result_b } else { result_a };
        assert!(matches!(loser, Err(DomainError::NoLongerListed { .. })));

        let final_owner = PlayerRepository::get(&f.store, &player_id)
            .await
            .unwrap()
            .unwrap()
            .team_id()
            .cloned()
            .unwrap();
        assert!(final_owner == f.buyer_id || final_owner == other_buyer_id);

        // Only the winner's budget moved.
        let budgets = (
            team_budget(&f, &f.buyer_id).await,
            team_budget(&f, &other_buyer_id).await,
        );
        let debited = [budgets.0, budgets.1]
            .iter()
            .filter(|b| **b == STARTING_BUDGET - 47_500)
            .count();
        let untouched = [budgets.0, budgets.1]
            .iter()
            .filter(|b| **b == STARTING_BUDGET)
            .count();
        assert_eq!((debited, untouched), (1, 1));
        assert_eq!(team_budget(&f, &f.seller_id).await, STARTING_BUDGET + 47_500);
    }

    #[tokio::test]
    async fn test_end_to_end_list_then_purchase() {
        // Team A lists a player; team B buys it at the discounted price.
        let store = InMemoryMarketStore::new();

        let team_a = Team::new(TeamId::generate(), "Team A", UserId::generate()).unwrap();
        let team_b = Team::new(TeamId::generate(), "Team B", UserId::generate()).unwrap();
        let a_id = team_a.id().clone();
        let b_id = team_b.id().clone();
        store.put_team(team_a);
        store.put_team(team_b);

        for i in 0..16 {
            store.put_player(new_player(&format!("A{}", i), &a_id));
        }
        for i in 0..10 {
            store.put_player(new_player(&format!("B{}", i), &b_id));
        }
        let target = new_player("Target", &a_id);
        let target_id = target.id().clone();
        store.put_player(target);

        let repo = Arc::new(store.clone());
        let listing = crate::infrastructure::market::ListingService::new(repo.clone());
        let transfers = TransferService::new(repo.clone(), repo.clone(), repo);

        let listed = listing
            .set_listing(&a_id, &target_id, Some(50_000), true)
            .await
            .unwrap();
        assert!(listed.is_listed());
        assert_eq!(listed.asking_price(), Some(50_000));

        let outcome = transfers.purchase(&b_id, &target_id).await.unwrap();
        assert_eq!(outcome.final_price, 47_500);
        assert_eq!(outcome.player.team_id(), Some(&b_id));
        assert!(!outcome.player.is_listed());

        let a_after = TeamRepository::get(&store, &a_id).await.unwrap().unwrap();
        let b_after = TeamRepository::get(&store, &b_id).await.unwrap().unwrap();
        assert_eq!(a_after.budget(), STARTING_BUDGET + 47_500);
        assert_eq!(b_after.budget(), STARTING_BUDGET - 47_500);
    }
}
