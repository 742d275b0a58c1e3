//! Roster policy
//!
//! Stateless rules over roster counts. Both checks are evaluated against
//! the counts as they stand *before* the transition under consideration.

/// A team must keep more than this many non-listed players to list another.
pub const MIN_ACTIVE_PLAYERS: usize = 15;

/// Maximum number of players a team may own.
pub const MAX_SQUAD_SIZE: usize = 25;

/// Whether a team may list one more player for sale.
///
/// `unlisted_count` is the number of non-listed players the team currently
/// has. Listing is rejected once that count has dropped to 15 or fewer.
pub fn can_list_another(unlisted_count: usize) -> bool {
    unlisted_count > MIN_ACTIVE_PLAYERS
}

/// Whether a team may receive one more player through a purchase.
pub fn can_receive(roster_size: usize) -> bool {
    roster_size < MAX_SQUAD_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_list_above_floor() {
        assert!(can_list_another(16));
        assert!(can_list_another(20));
    }

    #[test]
    fn test_cannot_list_at_or_below_floor() {
        assert!(!can_list_another(15));
        assert!(!can_list_another(14));
        assert!(!can_list_another(0));
    }

    #[test]
    fn test_can_receive_below_ceiling() {
        assert!(can_receive(0));
        assert!(can_receive(24));
    }

    #[test]
    fn test_cannot_receive_at_or_above_ceiling() {
        assert!(!can_receive(25));
        assert!(!can_receive(26));
    }
}
