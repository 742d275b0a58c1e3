//! Random squad generation
//!
//! Every newly registered team receives 20 players: 3 goalkeepers,
//! 6 defenders, 6 midfielders, and 5 attackers.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::player::{Player, PlayerId, Position};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Number of players per position in a fresh squad
pub const SQUAD_COMPOSITION: [(Position, usize); 4] = [
    (Position::Goalkeeper, 3),
    (Position::Defender, 6),
    (Position::Midfielder, 6),
    (Position::Attacker, 5),
];

const MIN_VALUE: i64 = 100_000;
const MAX_VALUE: i64 = 400_000;
const MIN_RATING: i32 = 50;
const MAX_RATING: i32 = 99;
const MIN_AGE: i32 = 18;
const MAX_AGE: i32 = 35;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Bruno", "Carlos", "Diego", "Emil", "Felix", "Goran", "Hugo", "Ivan", "Jonas",
    "Karim", "Luca", "Mateo", "Nico", "Oscar", "Pablo", "Rafael", "Sven", "Thiago", "Viktor",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Bergkamp", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia", "Hansen",
    "Ibrahim", "Jansen", "Kovac", "Lindgren", "Moreau", "Novak", "Oliveira", "Petrov",
    "Rossi", "Schmidt", "Torres", "Weber",
];

const NATIONALITIES: &[&str] = &[
    "Argentina", "Brazil", "Croatia", "Denmark", "England", "France", "Germany", "Italy",
    "Netherlands", "Nigeria", "Norway", "Portugal", "Senegal", "Spain", "Sweden", "Uruguay",
];

/// Generate the initial 20-player squad for a team
pub fn generate_squad(team_id: &TeamId) -> Result<Vec<Player>, DomainError> {
    let mut rng = rand::thread_rng();
    let mut squad = Vec::with_capacity(20);

    for (position, count) in SQUAD_COMPOSITION {
        for _ in 0..count {
            squad.push(random_player(&mut rng, position, team_id)?);
        }
    }

    Ok(squad)
}

fn random_player(
    rng: &mut impl Rng,
    position: Position,
    team_id: &TeamId,
) -> Result<Player, DomainError> {
    let first = FIRST_NAMES
        .choose(rng)
        .ok_or_else(|| DomainError::internal("Empty name pool"))?;
    let last = LAST_NAMES
        .choose(rng)
        .ok_or_else(|| DomainError::internal("Empty name pool"))?;
    let nationality = NATIONALITIES
        .choose(rng)
        .ok_or_else(|| DomainError::internal("Empty nationality pool"))?;

    Player::new(
        PlayerId::generate(),
        format!("{} {}", first, last),
        position,
        rng.gen_range(MIN_AGE..=MAX_AGE),
        *nationality,
        rng.gen_range(MIN_VALUE..=MAX_VALUE),
        rng.gen_range(MIN_RATING..=MAX_RATING),
        team_id.clone(),
    )
    .map_err(|e| DomainError::internal(format!("Generated player failed validation: {}", e)))
}
