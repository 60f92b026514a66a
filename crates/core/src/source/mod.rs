//! Traits for the external gym, roster and ledger stores.
//!
//! The stores are owned by the CRUD layer. This crate only reads snapshots
//! through these traits, one call per gym.

#[cfg(any(test, feature = "test-support"))]
pub mod memory;

use async_trait::async_trait;
use gymledger_shared::types::TenantId;
use thiserror::Error;

use crate::ledger::{LedgerEntry, LedgerQuery};
use crate::roster::Trainer;
use crate::tenant::Tenant;

/// Errors reported by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The store could not be reached or the query failed.
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    /// The store returned a record that cannot be decoded.
    #[error("Malformed record: {0}")]
    Malformed(String),
}

impl SourceError {
    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a malformed record error.
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// Read-only list of known gyms.
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Lists every gym.
    async fn list_tenants(&self) -> Result<Vec<Tenant>, SourceError>;

    /// Finds one gym.
    async fn find_tenant(&self, id: TenantId) -> Result<Option<Tenant>, SourceError> {
        Ok(self
            .list_tenants()
            .await?
            .into_iter()
            .find(|tenant| tenant.id == id))
    }
}

/// Per-gym ledger entries.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    /// Lists the entries of `tenant_id` matching `query`.
    async fn list_entries(
        &self,
        tenant_id: TenantId,
        query: &LedgerQuery,
    ) -> Result<Vec<LedgerEntry>, SourceError>;
}

/// Per-gym trainer rosters.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Lists the trainers of `tenant_id`.
    async fn list_trainers(&self, tenant_id: TenantId) -> Result<Vec<Trainer>, SourceError>;
}
