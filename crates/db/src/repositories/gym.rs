//! Gym directory backed by the `gyms` table.

use async_trait::async_trait;
use gymledger_core::source::{SourceError, TenantDirectory};
use gymledger_core::tenant::Tenant;
use gymledger_shared::types::TenantId;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::unavailable;
use crate::entities::gyms;

impl From<gyms::Model> for Tenant {
    fn from(model: gyms::Model) -> Self {
        Self::new(TenantId::from_uuid(model.id), model.name)
    }
}

/// Gym repository.
#[derive(Debug, Clone)]
pub struct GymRepository {
    db: DatabaseConnection,
}

impl GymRepository {
    /// Creates a new gym repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a gym.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, e.g. on a duplicate name.
    pub async fn create(&self, name: &str, address: Option<&str>) -> Result<Tenant, DbErr> {
        let now = chrono::Utc::now().into();

        let gym = gyms::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name.to_string()),
            address: Set(address.map(ToString::to_string)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(gym.insert(&self.db).await?.into())
    }
}

#[async_trait]
impl TenantDirectory for GymRepository {
    async fn list_tenants(&self) -> Result<Vec<Tenant>, SourceError> {
        let gyms = gyms::Entity::find()
            .order_by_asc(gyms::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| unavailable("list gyms", &e))?;

        Ok(gyms.into_iter().map(Tenant::from).collect())
    }

    async fn find_tenant(&self, id: TenantId) -> Result<Option<Tenant>, SourceError> {
        let gym = gyms::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(|e| unavailable("find gym", &e))?;

        Ok(gym.map(Tenant::from))
    }
}
