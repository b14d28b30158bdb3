//! User service
//!
//! Handles user CRUD and attaches the derived age on read paths.

use std::sync::Arc;

use crate::app::validation::validate_user;
use crate::domain::entities::{User, UserId};
use crate::domain::ports::{Clock, UserRepository};
use crate::error::{AppError, DomainError};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Largest offset the database driver can bind (`OFFSET` is a signed bigint)
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A user together with their age on the day it was read
#[derive(Debug, Clone)]
pub struct AgedUser {
    pub user: User,
    pub age: i32,
}

/// Normalised page request
///
/// Out-of-range values are replaced rather than rejected: a page below 1
/// becomes 1 and a page size outside `1..=MAX_PAGE_SIZE` becomes the default.
/// Pages past the end of any real table yield an offset capped at
/// `i64::MAX`, which simply returns no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = if page < 1 { DEFAULT_PAGE } else { page as u64 };
        let page_size = if page_size < 1 || page_size as u64 > MAX_PAGE_SIZE {
            DEFAULT_PAGE_SIZE
        } else {
            page_size as u64
        };
        Self { page, page_size }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .min(MAX_OFFSET)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Service for managing users
pub struct UserService<UR, C>
where
    UR: UserRepository + ?Sized,
    C: Clock + ?Sized,
{
    users: Arc<UR>,
    clock: Arc<C>,
}

impl<UR, C> UserService<UR, C>
where
    UR: UserRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(users: Arc<UR>, clock: Arc<C>) -> Self {
        Self { users, clock }
    }

    /// Create a user from raw request fields
    pub async fn create(&self, name: &str, dob: &str) -> Result<User, AppError> {
        let new_user = validate_user(name, dob, self.clock.today()).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected user create");
        })?;

        let user = self.users.create(&new_user).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to create user");
        })?;

        tracing::info!(user_id = %user.id, "User created successfully");
        Ok(user)
    }

    /// Get a user with their current age
    pub async fn get(&self, id: &UserId) -> Result<AgedUser, AppError> {
        let user = self
            .users
            .find_by_id(id)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, user_id = %id, "Failed to get user");
            })?
            .ok_or_else(|| not_found(id))?;

        let today = self.clock.today();
        Ok(AgedUser {
            age: user.age_on(today),
            user,
        })
    }

    /// List one page of users, each with their current age
    pub async fn list(&self, page: PageRequest) -> Result<(Vec<AgedUser>, u64), AppError> {
        let users = self
            .users
            .list(page.page_size, page.offset())
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, "Failed to list users");
            })?;

        let total = self.users.count().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to count users");
        })?;

        // One reference date for the whole page
        let today = self.clock.today();
        let aged = users
            .into_iter()
            .map(|user| AgedUser {
                age: user.age_on(today),
                user,
            })
            .collect();

        Ok((aged, total))
    }

    /// Replace a user's name and date of birth
    pub async fn update(&self, id: &UserId, name: &str, dob: &str) -> Result<User, AppError> {
        let new_user = validate_user(name, dob, self.clock.today()).inspect_err(|e| {
            tracing::warn!(error = %e, user_id = %id, "Rejected user update");
        })?;

        let user = self
            .users
            .update(id, &new_user)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, user_id = %id, "Failed to update user");
            })?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(user_id = %user.id, "User updated successfully");
        Ok(user)
    }

    /// Delete a user
    pub async fn delete(&self, id: &UserId) -> Result<(), AppError> {
        let deleted = self.users.delete(id).await.inspect_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to delete user");
        })?;

        if !deleted {
            return Err(not_found(id));
        }

        tracing::info!(user_id = %id, "User deleted successfully");
        Ok(())
    }
}

fn not_found(id: &UserId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("User {} not found", id)))
}
