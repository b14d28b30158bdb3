//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    next_id: Arc<RwLock<i32>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns a database error
    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        {
            let mut next_id = self.next_id.write().unwrap();
            *next_id = (*next_id).max(user.id.0);
            self.users.write().unwrap().insert(user.id, user);
        }
        self
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Database("Mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        self.check_failure()?;

        let id = {
            let mut next_id = self.next_id.write().unwrap();
            *next_id += 1;
            UserId(*next_id)
        };
        let now = Utc::now();
        let user = User {
            id,
            name: new_user.name.clone(),
            dob: new_user.dob,
            created_at: now,
            updated_at: now,
        };

        self.users.write().unwrap().insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        Ok(self.users.read().unwrap().get(id).cloned())
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<User>, DomainError> {
        self.check_failure()?;
        let users = self.users.read().unwrap();
        Ok(users
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, id: &UserId, new_user: &NewUser) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        let mut users = self.users.write().unwrap();
        Ok(users.get_mut(id).map(|user| {
            user.name = new_user.name.clone();
            user.dob = new_user.dob;
            user.updated_at = Utc::now();
            user.clone()
        }))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        self.check_failure()?;
        Ok(self.users.write().unwrap().remove(id).is_some())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check_failure()?;
        Ok(self.users.read().unwrap().len() as u64)
    }
}
