//! Collection result types.

use gymledger_shared::types::TenantId;
use serde::{Deserialize, Serialize};

use crate::ledger::LedgerEntry;
use crate::roster::Trainer;
use crate::tenant::Tenant;

/// Why a gym's data is missing from a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchFailure {
    /// The ledger fetch failed.
    Ledger {
        /// Source error text.
        message: String,
    },
    /// The roster fetch failed.
    Roster {
        /// Source error text.
        message: String,
    },
    /// The gym did not answer within the per-gym timeout.
    Timeout {
        /// Timeout that elapsed, in milliseconds.
        after_ms: u64,
    },
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ledger { message } => write!(f, "ledger fetch failed: {message}"),
            Self::Roster { message } => write!(f, "roster fetch failed: {message}"),
            Self::Timeout { after_ms } => write!(f, "timed out after {after_ms}ms"),
        }
    }
}

/// A gym whose data could not be collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedTenant {
    /// The gym.
    pub tenant_id: TenantId,
    /// Display name of the gym.
    pub tenant_name: String,
    /// What went wrong.
    pub reason: FetchFailure,
}

/// Data collected for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Gyms whose data is included, in directory order.
    pub tenants: Vec<Tenant>,
    /// Ledger entries of the included gyms.
    pub entries: Vec<LedgerEntry>,
    /// Trainers of the included gyms.
    pub trainers: Vec<Trainer>,
    /// Gyms left out because a fetch failed.
    pub failed_tenants: Vec<FailedTenant>,
    /// Ledger entries dropped by boundary validation.
    pub rejected_entries: usize,
    /// Trainers dropped by boundary validation.
    pub rejected_trainers: usize,
}
