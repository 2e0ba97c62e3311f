//! SeaORM implementation of PetRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set, SqlErr,
    TransactionTrait,
};

use crate::domain::{DomainError, DomainResult, FieldError, Pet, PetData, PetRepository};
use crate::infrastructure::database::entities::pet;

pub struct SeaOrmPetRepository {
    db: DatabaseConnection,
}

impl SeaOrmPetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn pet_model_to_domain(model: pet::Model) -> Pet {
    Pet {
        id: model.id,
        name: model.name,
        breed: model.breed,
        age: model.age,
        owner_id: model.owner_id,
    }
}

/// `owner_id` is the only foreign key on `pets`.
fn write_err(e: sea_orm::DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            DomainError::FieldValidation(vec![FieldError::owner_not_found()])
        }
        _ => DomainError::from(e),
    }
}

#[async_trait]
impl PetRepository for SeaOrmPetRepository {
    async fn list(&self) -> DomainResult<Vec<Pet>> {
        let models = pet::Entity::find()
            .order_by_asc(pet::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(pet_model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Pet>> {
        let model = pet::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(pet_model_to_domain))
    }

    async fn insert(&self, data: PetData) -> DomainResult<Pet> {
        let new_pet = pet::ActiveModel {
            id: NotSet,
            name: Set(data.name),
            breed: Set(data.breed),
            age: Set(data.age),
            owner_id: Set(data.owner_id),
        };

        let model = new_pet.insert(&self.db).await.map_err(write_err)?;
        Ok(pet_model_to_domain(model))
    }

    async fn update(&self, id: i32, data: PetData) -> DomainResult<Option<Pet>> {
        let txn = self.db.begin().await?;

        let Some(existing) = pet::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut active: pet::ActiveModel = existing.into();
        active.name = Set(data.name);
        active.breed = Set(data.breed);
        active.age = Set(data.age);
        active.owner_id = Set(data.owner_id);

        let updated = match active.update(&txn).await {
            Ok(model) => model,
            Err(e) => {
                txn.rollback().await?;
                return Err(write_err(e));
            }
        };
        txn.commit().await?;

        Ok(Some(pet_model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        let txn = self.db.begin().await?;

        if pet::Entity::find_by_id(id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Ok(false);
        }

        pet::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(true)
    }
}
