//! Finance read model types.

use chrono::NaiveDate;
use gymledger_shared::types::Money;
use serde::{Deserialize, Serialize};

use crate::collector::FailedTenant;
use crate::ledger::{CategoryTotal, LedgerEntry};
use crate::roster::Trainer;
use crate::tenant::TenantScope;

/// Ledger totals for the gyms in scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceSummary {
    /// Effective scope after role enforcement.
    pub scope: TenantScope,
    /// Sum of income amounts.
    pub income_total: Money,
    /// Sum of expense amounts.
    pub expense_total: Money,
    /// Income minus expenses.
    pub balance: Money,
    /// Number of entries.
    pub count: usize,
    /// Totals per kind and category.
    pub by_category: Vec<CategoryTotal>,
    /// Matching entries, newest first.
    pub entries: Vec<LedgerEntry>,
    /// Gyms missing from the totals.
    pub failed_tenants: Vec<FailedTenant>,
    /// Entries dropped by boundary validation.
    pub rejected_entries: usize,
}

/// One trainer in the salary view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerSalaryRow {
    /// Roster data.
    pub trainer: Trainer,
    /// Latest visible payment.
    pub last_payment_date: Option<NaiveDate>,
    /// Salary shown and summed for the trainer.
    pub configured_or_default_salary: Money,
    /// True when the roster has no salary and the default applies.
    pub uses_default_salary: bool,
}

/// Trainer salaries for the gyms in scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryView {
    /// Effective scope after role enforcement.
    pub scope: TenantScope,
    /// Matching trainers in roster order.
    pub trainers: Vec<TrainerSalaryRow>,
    /// Sum of `configured_or_default_salary`.
    pub payroll_total: Money,
    /// Number of trainers.
    pub count: usize,
    /// Gyms missing from the view.
    pub failed_tenants: Vec<FailedTenant>,
    /// Trainers dropped by boundary validation.
    pub rejected_trainers: usize,
}
