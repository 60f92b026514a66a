//! Repository abstractions for data access.
//!
//! Repositories implement the read traits of `gymledger_core::source` over
//! `SeaORM`, plus the inserts used by the seeder.

pub mod gym;
pub mod ledger;
pub mod trainer;

pub use gym::GymRepository;
pub use ledger::{CreateLedgerEntryInput, LedgerRepository, LedgerWriteError};
pub use trainer::{CreateTrainerInput, TrainerRepository};

use gymledger_core::source::SourceError;
use sea_orm::DbErr;
use tracing::error;

/// Maps a database error to a source error, logging the cause.
pub(crate) fn unavailable(operation: &str, err: &DbErr) -> SourceError {
    error!(operation, error = %err, "Database query failed");
    SourceError::unavailable(format!("{operation}: {err}"))
}
