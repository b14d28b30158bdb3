//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};

use crate::domain::entities::{NewUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = users::ActiveModel {
            id: NotSet,
            name: Set(user.name.clone()),
            dob: Set(user.dob),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<User>, DomainError> {
        let results = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: &UserId, user: &NewUser) -> Result<Option<User>, DomainError> {
        let result = users::ActiveModel {
            id: Set(id.0),
            name: Set(user.name.clone()),
            dob: Set(user.dob),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .update(&self.db)
        .await;

        match result {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let result = users::Entity::delete_by_id(id.0).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(users::Entity::find().count(&self.db).await?)
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: UserId(model.id),
            name: model.name,
            dob: model.dob,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
