//! Filter pipeline for ledger entries and trainer rows.
//!
//! Both filters are pure and order-preserving, and applying the same
//! criteria twice yields the same rows as applying them once.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entry::{EntryKind, LedgerEntry, LedgerQuery, category_eq};
use super::payment::PaymentHistory;
use crate::roster::Trainer;
use crate::tenant::TenantScope;

/// Trainer payment state within the filter window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatusFilter {
    /// At least one visible payment.
    Paid,
    /// No visible payment.
    Unpaid,
}

/// Invalid filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Month outside 0..=11.
    #[error("Month must be between 0 (January) and 11 (December), got {0}")]
    InvalidMonth(u32),
}

/// Criteria applied to ledger entries and trainers.
///
/// `None` on any field means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Gyms in view.
    #[serde(default)]
    pub tenant_scope: TenantScope,
    /// Zero-based month (0 = January).
    pub month: Option<u32>,
    /// Calendar year.
    pub year: Option<i32>,
    /// Income or expense only.
    pub kind: Option<EntryKind>,
    /// Category, compared case-insensitively.
    pub category: Option<String>,
    /// Trainer payment state; ignored for ledger entries.
    pub payment_status: Option<PaymentStatusFilter>,
}

impl FilterCriteria {
    /// Checks that the criteria can match anything meaningful.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidMonth` for a month above 11.
    pub fn validate(&self) -> Result<(), FilterError> {
        match self.month {
            Some(month) if month > 11 => Err(FilterError::InvalidMonth(month)),
            _ => Ok(()),
        }
    }

    /// Returns the same criteria restricted to `scope`.
    #[must_use]
    pub fn with_scope(mut self, scope: TenantScope) -> Self {
        self.tenant_scope = scope;
        self
    }

    /// The part of the criteria a ledger source can apply itself.
    #[must_use]
    pub fn ledger_query(&self) -> LedgerQuery {
        LedgerQuery {
            kind: self.kind,
            category: self.category.clone(),
        }
    }

    /// Returns true if `date` falls inside the month/year window.
    #[must_use]
    pub fn matches_date(&self, date: NaiveDate) -> bool {
        self.month.is_none_or(|month| date.month0() == month)
            && self.year.is_none_or(|year| date.year() == year)
    }

    /// Returns true if `entry` passes every entry predicate.
    #[must_use]
    pub fn matches_entry(&self, entry: &LedgerEntry) -> bool {
        self.tenant_scope.contains(entry.tenant_id)
            && self.matches_date(entry.date)
            && self.kind.is_none_or(|kind| entry.kind == kind)
            && self
                .category
                .as_deref()
                .is_none_or(|category| category_eq(&entry.category, category))
    }

    /// Returns true if `trainer` passes every trainer predicate.
    ///
    /// The trainer's temporal key is their latest visible payment, falling
    /// back to the join date for trainers without one.
    #[must_use]
    pub fn matches_trainer(&self, trainer: &Trainer, history: &PaymentHistory) -> bool {
        let last_payment = history.get(&trainer.id).copied();
        let temporal_key = last_payment.unwrap_or(trainer.joined_at);

        self.tenant_scope.contains(trainer.tenant_id)
            && self.matches_date(temporal_key)
            && self.payment_status.is_none_or(|status| match status {
                PaymentStatusFilter::Paid => last_payment.is_some(),
                PaymentStatusFilter::Unpaid => last_payment.is_none(),
            })
    }
}

/// Applies filter criteria to collected rows.
pub struct FilterPipeline;

impl FilterPipeline {
    /// Keeps the entries matching `criteria`, in input order.
    #[must_use]
    pub fn filter_entries(entries: &[LedgerEntry], criteria: &FilterCriteria) -> Vec<LedgerEntry> {
        entries
            .iter()
            .filter(|entry| criteria.matches_entry(entry))
            .cloned()
            .collect()
    }

    /// Keeps the trainers matching `criteria`, in input order.
    #[must_use]
    pub fn filter_trainers(
        trainers: &[Trainer],
        history: &PaymentHistory,
        criteria: &FilterCriteria,
    ) -> Vec<Trainer> {
        trainers
            .iter()
            .filter(|trainer| criteria.matches_trainer(trainer, history))
            .cloned()
            .collect()
    }
}
