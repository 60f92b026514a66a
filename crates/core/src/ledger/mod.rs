//! Gym ledger logic.
//!
//! This module implements the computation over collected ledger data:
//! - Ledger entries and the source-side query
//! - Boundary validation of fetched records
//! - Trainer payment history resolution
//! - The filter pipeline for entries and trainers
//! - Ledger and payroll aggregation

pub mod aggregate;
pub mod entry;
pub mod filter;
pub mod payment;
pub mod validation;

#[cfg(test)]
mod aggregate_props;
#[cfg(test)]
mod filter_props;
#[cfg(test)]
mod payment_props;
#[cfg(test)]
mod strategies;

pub use aggregate::{CategoryTotal, LedgerAggregator, LedgerSummary, PayrollSummary};
pub use entry::{EntryKind, LedgerEntry, LedgerQuery, category_key, trim_category};
pub use filter::{FilterCriteria, FilterError, FilterPipeline, PaymentStatusFilter};
pub use payment::{PaymentHistory, PaymentHistoryResolver, PaymentStatus};
pub use validation::{LedgerValidationError, validate_entry, validate_trainer};
