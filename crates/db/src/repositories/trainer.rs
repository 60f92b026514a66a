//! Trainer rosters backed by the `trainers` table.

use async_trait::async_trait;
use chrono::NaiveDate;
use gymledger_core::roster::Trainer;
use gymledger_core::source::{RosterSource, SourceError};
use gymledger_shared::types::{Money, TenantId, TrainerId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::unavailable;
use crate::entities::trainers;

impl From<trainers::Model> for Trainer {
    fn from(model: trainers::Model) -> Self {
        Self {
            id: TrainerId::from_uuid(model.id),
            tenant_id: TenantId::from_uuid(model.gym_id),
            name: model.name,
            contact: model.contact,
            configured_salary: model.salary.map(Money::new),
            joined_at: model.joined_at,
        }
    }
}

/// Input for adding a trainer to a roster.
#[derive(Debug, Clone)]
pub struct CreateTrainerInput {
    /// Gym the trainer works at.
    pub tenant_id: TenantId,
    /// Full name.
    pub name: String,
    /// Phone number or email.
    pub contact: String,
    /// Salary; `None` applies the configured default.
    pub salary: Option<Money>,
    /// Date the trainer joined.
    pub joined_at: NaiveDate,
}

/// Trainer repository.
#[derive(Debug, Clone)]
pub struct TrainerRepository {
    db: DatabaseConnection,
}

impl TrainerRepository {
    /// Creates a new trainer repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a trainer.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(&self, input: CreateTrainerInput) -> Result<Trainer, DbErr> {
        let now = chrono::Utc::now().into();

        let trainer = trainers::ActiveModel {
            id: Set(Uuid::now_v7()),
            gym_id: Set(input.tenant_id.into_inner()),
            name: Set(input.name),
            contact: Set(input.contact),
            salary: Set(input.salary.map(Money::amount)),
            joined_at: Set(input.joined_at),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(trainer.insert(&self.db).await?.into())
    }
}

#[async_trait]
impl RosterSource for TrainerRepository {
    async fn list_trainers(&self, tenant_id: TenantId) -> Result<Vec<Trainer>, SourceError> {
        let rows = trainers::Entity::find()
            .filter(trainers::Column::GymId.eq(tenant_id.into_inner()))
            .order_by_asc(trainers::Column::JoinedAt)
            .order_by_asc(trainers::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| unavailable("list trainers", &e))?;

        Ok(rows.into_iter().map(Trainer::from).collect())
    }
}
