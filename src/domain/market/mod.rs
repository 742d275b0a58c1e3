//! Market domain module
//!
//! Types shared by the listing manager and the transfer engine, plus the
//! store-side contract for the atomic purchase settlement.

use async_trait::async_trait;

use crate::domain::player::{Player, PlayerId};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Transaction discount applied to every sale, in percent of the asking
/// price. The buyer pays the discounted amount and the seller receives
/// exactly the same amount.
pub const SALE_DISCOUNT_PERCENT: i64 = 5;

/// Final price for a sale: the asking price less the fixed discount,
/// rounded down to the nearest whole currency unit.
pub fn final_sale_price(asking_price: i64) -> i64 {
    asking_price * (100 - SALE_DISCOUNT_PERCENT) / 100
}

/// Result of a successful purchase
#[derive(Debug, Clone)]
pub struct PurchaseOutcome {
    /// The player's state after the transfer committed
    pub player: Player,
    /// The amount that moved between the two budgets
    pub final_price: i64,
}

/// Store-side contract for the purchase settlement.
///
/// `settle_purchase` is the atomic unit of work: it re-reads the player's
/// listing flag under the store's isolation, fails with `NoLongerListed`
/// if the flag has been cleared, and otherwise moves the player to the
/// buyer and settles both budgets. All writes commit together or not at
/// all; concurrent settlements of the same player are serialized so that
/// exactly one can observe the listed flag.
#[async_trait]
pub trait TransferStore: Send + Sync + std::fmt::Debug {
    /// Atomically transfer `player_id` to `buyer_team_id` for `final_price`,
    /// debiting the buyer and crediting the current owner. Returns the
    /// player's post-commit state.
    async fn settle_purchase(
        &self,
        player_id: &PlayerId,
        buyer_team_id: &TeamId,
        final_price: i64,
    ) -> Result<Player, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_price_applies_five_percent_discount() {
        assert_eq!(final_sale_price(50_000), 47_500);
        assert_eq!(final_sale_price(100_000), 95_000);
    }

    #[test]
    fn test_final_price_rounds_down() {
        // 12345 * 0.95 = 11727.75
        assert_eq!(final_sale_price(12_345), 11_727);
        // 101 * 0.95 = 95.95
        assert_eq!(final_sale_price(101), 95);
    }

    #[test]
    fn test_final_price_of_small_amounts() {
        assert_eq!(final_sale_price(1), 0);
        assert_eq!(final_sale_price(20), 19);
    }
}
