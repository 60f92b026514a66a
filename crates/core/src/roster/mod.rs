//! Trainer roster entries.

use chrono::NaiveDate;
use gymledger_shared::types::{Money, TenantId, TrainerId};
use serde::{Deserialize, Serialize};

/// A trainer on a gym roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    /// Trainer identifier.
    pub id: TrainerId,
    /// Gym the trainer belongs to.
    pub tenant_id: TenantId,
    /// Full name.
    pub name: String,
    /// Phone number or email.
    pub contact: String,
    /// Salary set on the roster; `None` means the configured default applies.
    pub configured_salary: Option<Money>,
    /// Date the trainer was added to the roster.
    pub joined_at: NaiveDate,
}
