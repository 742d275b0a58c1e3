//! Team API response types

use serde::Serialize;

use crate::domain::player::Player;
use crate::domain::team::Team;

use super::player::PlayerResponse;

/// Team response (safe to expose)
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub budget: i64,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TeamResponse {
    pub fn from_domain(team: &Team) -> Self {
        Self {
            id: team.id().as_str().to_string(),
            name: team.name().to_string(),
            budget: team.budget(),
            user_id: team.user_id().as_str().to_string(),
            created_at: team.created_at().to_rfc3339(),
            updated_at: team.updated_at().to_rfc3339(),
        }
    }
}

/// A team with its full roster
#[derive(Debug, Serialize)]
pub struct TeamViewResponse {
    pub team: TeamResponse,
    pub players: Vec<PlayerResponse>,
}

impl TeamViewResponse {
    pub fn new(team: &Team, players: &[Player]) -> Self {
        Self {
            team: TeamResponse::from_domain(team),
            players: players.iter().map(PlayerResponse::from_domain).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamId;
    use crate::domain::user::UserId;

    #[test]
    fn test_team_response_fields() {
        let team = Team::new(TeamId::generate(), "Red Dragons", UserId::generate()).unwrap();
        let response = TeamResponse::from_domain(&team);

        assert_eq!(response.name, "Red Dragons");
        assert_eq!(response.budget, 5_000_000);
        assert_eq!(response.id, team.id().as_str());
    }
}
