//! Gym ledgers backed by the `ledger_entries` table.

use async_trait::async_trait;
use chrono::NaiveDate;
use gymledger_core::ledger::{EntryKind, LedgerEntry, LedgerQuery, category_key, trim_category};
use gymledger_core::source::{LedgerSource, SourceError};
use gymledger_shared::types::{LedgerEntryId, Money, TenantId, TrainerId};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::unavailable;
use crate::entities::{ledger_entries, sea_orm_active_enums::LedgerKind};

impl From<ledger_entries::Model> for LedgerEntry {
    fn from(model: ledger_entries::Model) -> Self {
        Self {
            id: LedgerEntryId::from_uuid(model.id),
            tenant_id: TenantId::from_uuid(model.gym_id),
            date: model.entry_date,
            kind: model.kind.into(),
            category: model.category,
            amount: Money::new(model.amount),
            description: model.description,
            trainer_id: model.trainer_id.map(TrainerId::from_uuid),
        }
    }
}

/// Error types for ledger writes.
#[derive(Debug, thiserror::Error)]
pub enum LedgerWriteError {
    /// Amounts are stored as non-negative values; the kind carries the sign.
    #[error("Ledger amount must not be negative, got {0}")]
    NegativeAmount(Money),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for recording a ledger entry.
#[derive(Debug, Clone)]
pub struct CreateLedgerEntryInput {
    /// Gym that owns the entry.
    pub tenant_id: TenantId,
    /// Entry date.
    pub date: NaiveDate,
    /// Income or expense.
    pub kind: EntryKind,
    /// Free-text category, e.g. "Salary".
    pub category: String,
    /// Non-negative amount.
    pub amount: Money,
    /// Free-text description.
    pub description: String,
    /// Trainer paid by this entry, if any.
    pub trainer_id: Option<TrainerId>,
}

/// Ledger repository.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a ledger entry.
    ///
    /// # Errors
    ///
    /// Returns `LedgerWriteError::NegativeAmount` for a negative amount, or a
    /// database error if the insert fails.
    pub async fn create(&self, input: CreateLedgerEntryInput) -> Result<LedgerEntry, LedgerWriteError> {
        if input.amount.is_negative() {
            return Err(LedgerWriteError::NegativeAmount(input.amount));
        }

        let now = chrono::Utc::now().into();

        let entry = ledger_entries::ActiveModel {
            id: Set(Uuid::now_v7()),
            gym_id: Set(input.tenant_id.into_inner()),
            entry_date: Set(input.date),
            kind: Set(input.kind.into()),
            category: Set(trim_category(&input.category).to_string()),
            amount: Set(input.amount.amount()),
            description: Set(input.description),
            trainer_id: Set(input.trainer_id.map(TrainerId::into_inner)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(entry.insert(&self.db).await?.into())
    }
}

#[async_trait]
impl LedgerSource for LedgerRepository {
    async fn list_entries(
        &self,
        tenant_id: TenantId,
        query: &LedgerQuery,
    ) -> Result<Vec<LedgerEntry>, SourceError> {
        let mut select = ledger_entries::Entity::find()
            .filter(ledger_entries::Column::GymId.eq(tenant_id.into_inner()));

        if let Some(kind) = query.kind {
            select = select.filter(ledger_entries::Column::Kind.eq(LedgerKind::from(kind)));
        }

        if let Some(category) = query.category.as_deref() {
            select = select.filter(Expr::cust_with_values(
                "LOWER(TRIM(category)) = $1",
                [category_key(category)],
            ));
        }

        let rows = select
            .order_by_desc(ledger_entries::Column::EntryDate)
            .order_by_desc(ledger_entries::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| unavailable("list ledger entries", &e))?;

        Ok(rows.into_iter().map(LedgerEntry::from).collect())
    }
}
