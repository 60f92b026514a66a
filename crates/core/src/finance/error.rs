//! Finance service errors.

use thiserror::Error;

use crate::collector::CollectError;
use crate::ledger::FilterError;
use crate::tenant::ScopeError;

/// Errors returned by [`FinanceService`](super::FinanceService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinanceError {
    /// The caller may not see the requested gyms.
    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// Collection could not start.
    #[error(transparent)]
    Collect(#[from] CollectError),

    /// The filter criteria are invalid.
    #[error(transparent)]
    InvalidCriteria(#[from] FilterError),
}
