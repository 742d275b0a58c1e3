//! Player repository trait and market query types

use async_trait::async_trait;

use super::entity::{Player, PlayerId};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Default page size for market queries
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sortable fields for market queries
///
/// This is a fixed allow-list, not a pass-through of caller-supplied field
/// names. Only the asking price is sortable; any other requested field
/// silently falls back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerSortField {
    #[default]
    AskingPrice,
}

impl PlayerSortField {
    /// Resolve a caller-supplied sort field against the allow-list
    pub fn resolve(requested: Option<&str>) -> Self {
        match requested {
            Some("asking_price") | Some("askingPrice") => Self::AskingPrice,
            _ => Self::AskingPrice,
        }
    }

    /// Storage column name for this field
    pub fn column(&self) -> &'static str {
        match self {
            Self::AskingPrice => "asking_price",
        }
    }
}

/// Sort direction for market queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn resolve(requested: Option<&str>) -> Self {
        match requested {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Query parameters for the player directory
#[derive(Debug, Clone, Default)]
pub struct PlayerQuery {
    /// Case-insensitive substring match on player name
    pub name: Option<String>,
    /// Case-insensitive substring match on owning-team name
    pub team_name: Option<String>,
    /// Filter by listing flag
    pub is_listed: Option<bool>,
    /// 1-indexed page number (default 1)
    pub page: Option<usize>,
    /// Page size (default 10)
    pub page_size: Option<usize>,
    /// Sort field
    pub sort_by: PlayerSortField,
    /// Sort direction
    pub sort_direction: SortDirection,
}

impl PlayerQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn with_listed(mut self, listed: bool) -> Self {
        self.is_listed = Some(listed);
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = direction;
        self
    }

    /// Effective 1-indexed page number
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    /// Number of records to skip
    pub fn offset(&self) -> usize {
        (self.page() - 1) * self.page_size()
    }
}

/// One page of query results
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

/// Repository for reading and writing players
#[async_trait]
pub trait PlayerRepository: Send + Sync + std::fmt::Debug {
    /// Get a player by ID
    async fn get(&self, id: &PlayerId) -> Result<Option<Player>, DomainError>;

    /// List all players owned by a team
    async fn list_by_team(&self, team_id: &TeamId) -> Result<Vec<Player>, DomainError>;

    /// Insert a batch of players (squad generation)
    async fn create_many(&self, players: Vec<Player>) -> Result<(), DomainError>;

    /// Update a player's listing flag and asking price in a single write
    async fn update_listing(
        &self,
        id: &PlayerId,
        listed: bool,
        asking_price: Option<i64>,
    ) -> Result<Player, DomainError>;

    /// Search the market. Players without an asking price are always
    /// excluded, regardless of other filters.
    async fn search(&self, query: &PlayerQuery) -> Result<Page<Player>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_allow_list_falls_back() {
        assert_eq!(
            PlayerSortField::resolve(Some("asking_price")),
            PlayerSortField::AskingPrice
        );
        assert_eq!(
            PlayerSortField::resolve(Some("rating")),
            PlayerSortField::AskingPrice
        );
        assert_eq!(
            PlayerSortField::resolve(Some("name")),
            PlayerSortField::AskingPrice
        );
        assert_eq!(PlayerSortField::resolve(None), PlayerSortField::AskingPrice);
    }

    #[test]
    fn test_sort_direction_defaults_to_desc() {
        assert_eq!(SortDirection::resolve(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::resolve(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::resolve(Some("sideways")), SortDirection::Desc);
        assert_eq!(SortDirection::resolve(None), SortDirection::Desc);
    }

    #[test]
    fn test_query_pagination_defaults() {
        let query = PlayerQuery::new();
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 10);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_query_offset_is_one_indexed() {
        let query = PlayerQuery::new().with_page(3).with_page_size(20);
        assert_eq!(query.offset(), 40);
    }

    #[test]
    fn test_query_page_zero_clamps_to_one() {
        let query = PlayerQuery::new().with_page(0);
        assert_eq!(query.page(), 1);
        assert_eq!(query.offset(), 0);
    }
}
