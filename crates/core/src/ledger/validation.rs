//! Boundary checks for data returned by sources.
//!
//! Sources are expected to hand over validated records. Anything that slips
//! through is rejected here and counted, never aggregated.

use gymledger_shared::types::{LedgerEntryId, Money, TenantId, TrainerId};
use thiserror::Error;

use super::entry::LedgerEntry;
use crate::roster::Trainer;

/// Reasons a fetched record is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerValidationError {
    /// Entry amount is negative.
    #[error("Ledger entry {id} has negative amount {amount}")]
    NegativeAmount {
        /// Offending entry.
        id: LedgerEntryId,
        /// The amount found.
        amount: Money,
    },

    /// Entry belongs to a different gym than the one it was fetched for.
    #[error("Ledger entry {id} belongs to gym {found}, fetched for {expected}")]
    ForeignEntry {
        /// Offending entry.
        id: LedgerEntryId,
        /// Gym the fetch was for.
        expected: TenantId,
        /// Gym on the entry.
        found: TenantId,
    },

    /// Trainer belongs to a different gym than the one it was fetched for.
    #[error("Trainer {id} belongs to gym {found}, fetched for {expected}")]
    ForeignTrainer {
        /// Offending trainer.
        id: TrainerId,
        /// Gym the fetch was for.
        expected: TenantId,
        /// Gym on the trainer.
        found: TenantId,
    },

    /// Configured salary is negative.
    #[error("Trainer {id} has negative salary {salary}")]
    NegativeSalary {
        /// Offending trainer.
        id: TrainerId,
        /// The salary found.
        salary: Money,
    },
}

/// Validates a ledger entry fetched for `tenant_id`.
///
/// # Errors
///
/// Returns an error if the amount is negative or the entry belongs to another gym.
pub fn validate_entry(entry: &LedgerEntry, tenant_id: TenantId) -> Result<(), LedgerValidationError> {
    if entry.tenant_id != tenant_id {
        return Err(LedgerValidationError::ForeignEntry {
            id: entry.id,
            expected: tenant_id,
            found: entry.tenant_id,
        });
    }

    if entry.amount.is_negative() {
        return Err(LedgerValidationError::NegativeAmount {
            id: entry.id,
            amount: entry.amount,
        });
    }

    Ok(())
}

/// Validates a trainer fetched for `tenant_id`.
///
/// # Errors
///
/// Returns an error if the trainer belongs to another gym or has a negative salary.
pub fn validate_trainer(trainer: &Trainer, tenant_id: TenantId) -> Result<(), LedgerValidationError> {
    if trainer.tenant_id != tenant_id {
        return Err(LedgerValidationError::ForeignTrainer {
            id: trainer.id,
            expected: tenant_id,
            found: trainer.tenant_id,
        });
    }

    match trainer.configured_salary {
        Some(salary) if salary.is_negative() => Err(LedgerValidationError::NegativeSalary {
            id: trainer.id,
            salary,
        }),
        _ => Ok(()),
    }
}
