//! Collector error types.

use gymledger_shared::types::TenantId;
use thiserror::Error;

use crate::source::SourceError;

/// Errors that abort a collection.
///
/// Failures of individual gyms are not errors; they are reported in
/// [`Collection::failed_tenants`](super::Collection::failed_tenants).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectError {
    /// The gym directory could not be read.
    #[error("Gym directory unavailable: {0}")]
    Directory(#[source] SourceError),

    /// The requested gym does not exist.
    #[error("Unknown gym: {0}")]
    UnknownTenant(TenantId),
}
