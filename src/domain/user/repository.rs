//! User repository trait

use async_trait::async_trait;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository for managing user accounts
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// Get a user by ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by email
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
