//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewUser, User, UserId};
use crate::error::DomainError;

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return it with its assigned id
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// List users ordered by id ascending
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<User>, DomainError>;

    /// Replace name and date of birth. Returns `None` if no such user exists.
    async fn update(&self, id: &UserId, user: &NewUser) -> Result<Option<User>, DomainError>;

    /// Delete a user. Returns `false` if no such user existed.
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Total number of users
    async fn count(&self) -> Result<u64, DomainError>;
}
