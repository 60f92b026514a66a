//! Finance read models.
//!
//! [`FinanceService`] ties scope enforcement, collection, filtering and
//! aggregation together for the two dashboard views: the ledger summary and
//! the trainer salary view.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::FinanceError;
pub use service::FinanceService;
pub use types::{FinanceSummary, SalaryView, TrainerSalaryRow};
