//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use tracing::debug;

use crate::domain::{DomainError, DomainResult, FieldError, User, UserData, UserRepository};
use crate::infrastructure::database::entities::{pet, user};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
    }
}

/// The only unique column on `users` is `email`, so any unique violation
/// there is reported as a duplicate email.
fn write_err(e: sea_orm::DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::FieldValidation(vec![FieldError::email_exists()])
        }
        _ => DomainError::from(e),
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn insert(&self, data: UserData) -> DomainResult<User> {
        let new_user = user::ActiveModel {
            id: NotSet,
            name: Set(data.name),
            email: Set(data.email),
        };

        let model = new_user.insert(&self.db).await.map_err(write_err)?;
        Ok(user_model_to_domain(model))
    }

    async fn update(&self, id: i32, data: UserData) -> DomainResult<Option<User>> {
        let txn = self.db.begin().await?;

        let Some(existing) = user::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut active: user::ActiveModel = existing.into();
        active.name = Set(data.name);
        active.email = Set(data.email);

        let updated = match active.update(&txn).await {
            Ok(model) => model,
            Err(e) => {
                txn.rollback().await?;
                return Err(write_err(e));
            }
        };
        txn.commit().await?;

        Ok(Some(user_model_to_domain(updated)))
    }

    async fn delete_with_pets(&self, id: i32) -> DomainResult<bool> {
        let txn = self.db.begin().await?;

        if user::Entity::find_by_id(id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Ok(false);
        }

        let pets = pet::Entity::delete_many()
            .filter(pet::Column::OwnerId.eq(id))
            .exec(&txn)
            .await?;
        user::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        debug!(user_id = id, pets_deleted = pets.rows_affected, "User deleted");
        Ok(true)
    }

    async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> DomainResult<bool> {
        let mut query = user::Entity::find().filter(user::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(user::Column::Id.ne(id));
        }

        Ok(query.count(&self.db).await? > 0)
    }
}
