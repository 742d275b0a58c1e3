//! Player entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    validate_player_age, validate_player_id, validate_player_name, validate_player_rating,
    PlayerValidationError,
};
use crate::domain::team::TeamId;

/// Player identifier - a UUID string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new PlayerId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, PlayerValidationError> {
        let id = id.into();
        validate_player_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh random PlayerId
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerId {
    type Error = PlayerValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playing position of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

impl Position {
    /// All positions, in squad-sheet order
    pub const ALL: [Position; 4] = [
        Self::Goalkeeper,
        Self::Defender,
        Self::Midfielder,
        Self::Attacker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "goalkeeper",
            Self::Defender => "defender",
            Self::Midfielder => "midfielder",
            Self::Attacker => "attacker",
        }
    }

    /// Parse a position from its storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "goalkeeper" => Some(Self::Goalkeeper),
            "defender" => Some(Self::Defender),
            "midfielder" => Some(Self::Midfielder),
            "attacker" => Some(Self::Attacker),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Player entity
///
/// A player is always owned by a team in steady state; `team_id` is `None`
/// only transiently while ownership is being reassigned. The listing
/// invariant is that `asking_price` is present exactly when `is_listed` is
/// set - every mutation here maintains it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier
    id: PlayerId,
    /// Full name
    name: String,
    /// Playing position
    position: Position,
    /// Age in years
    age: i32,
    /// Country of origin
    nationality: String,
    /// Intrinsic market value, independent of any asking price
    value: i64,
    /// Skill rating, 0-99
    rating: i32,
    /// Owning team
    team_id: Option<TeamId>,
    /// Whether the player is currently for sale
    is_listed: bool,
    /// Seller-set sale price; present only while listed
    asking_price: Option<i64>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Player {
    /// Create a new unlisted player owned by a team
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        position: Position,
        age: i32,
        nationality: impl Into<String>,
        value: i64,
        rating: i32,
        team_id: TeamId,
    ) -> Result<Self, PlayerValidationError> {
        let name = name.into();
        validate_player_name(&name)?;
        validate_player_age(age)?;
        validate_player_rating(rating)?;
        let now = Utc::now();

        Ok(Self {
            id,
            name,
            position,
            age,
            nationality: nationality.into(),
            value,
            rating,
            team_id: Some(team_id),
            is_listed: false,
            asking_price: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate a player from storage without re-validating
    #[allow(clippy::too_many_arguments)]
    pub fn from_storage(
        id: PlayerId,
        name: String,
        position: Position,
        age: i32,
        nationality: String,
        value: i64,
        rating: i32,
        team_id: Option<TeamId>,
        is_listed: bool,
        asking_price: Option<i64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            position,
            age,
            nationality,
            value,
            rating,
            team_id,
            is_listed,
            asking_price,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn team_id(&self) -> Option<&TeamId> {
        self.team_id.as_ref()
    }

    pub fn is_listed(&self) -> bool {
        self.is_listed
    }

    pub fn asking_price(&self) -> Option<i64> {
        self.asking_price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutations

    /// Put the player on the market at an asking price
    pub fn list_for_sale(&mut self, asking_price: i64) {
        self.is_listed = true;
        self.asking_price = Some(asking_price);
        self.updated_at = Utc::now();
    }

    /// Take the player off the market, clearing the asking price
    pub fn unlist(&mut self) {
        self.is_listed = false;
        self.asking_price = None;
        self.updated_at = Utc::now();
    }

    /// Move the player to a new owning team, ending any listing
    pub fn transfer_to(&mut self, team_id: TeamId) {
        self.team_id = Some(team_id);
        self.is_listed = false;
        self.asking_price = None;
        self.updated_at = Utc::now();
    }
}
