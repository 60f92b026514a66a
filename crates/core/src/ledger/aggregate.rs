//! Ledger and payroll summaries.

use std::collections::BTreeMap;

use gymledger_shared::types::Money;
use serde::{Deserialize, Serialize};

use super::entry::{EntryKind, LedgerEntry, category_key, trim_category};
use crate::roster::Trainer;

/// Totals over a set of ledger entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Sum of income amounts.
    pub income_total: Money,
    /// Sum of expense amounts.
    pub expense_total: Money,
    /// `income_total - expense_total`.
    pub balance: Money,
    /// Number of entries summarized.
    pub count: usize,
}

/// Totals over a set of trainers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Sum of configured salaries, default salary where none is configured.
    pub payroll_total: Money,
    /// Number of trainers summarized.
    pub count: usize,
}

/// Total of one kind/category pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Income or expense.
    pub kind: EntryKind,
    /// Category as first seen in the input.
    pub category: String,
    /// Sum of amounts.
    pub total: Money,
    /// Number of entries.
    pub count: usize,
}

/// Computes scalar summaries over filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerAggregator {
    default_salary: Money,
}

impl LedgerAggregator {
    /// Creates an aggregator using `default_salary` for trainers without one.
    #[must_use]
    pub const fn new(default_salary: Money) -> Self {
        Self { default_salary }
    }

    /// Returns the fallback salary.
    #[must_use]
    pub const fn default_salary(&self) -> Money {
        self.default_salary
    }

    /// Summarizes ledger entries. Empty input yields all zeros.
    #[must_use]
    pub fn summarize(&self, entries: &[LedgerEntry]) -> LedgerSummary {
        let (income_total, expense_total) =
            entries
                .iter()
                .fold((Money::ZERO, Money::ZERO), |(income, expense), entry| {
                    match entry.kind {
                        EntryKind::Income => (income + entry.amount, expense),
                        EntryKind::Expense => (income, expense + entry.amount),
                    }
                });

        LedgerSummary {
            income_total,
            expense_total,
            balance: income_total - expense_total,
            count: entries.len(),
        }
    }

    /// Returns the configured salary of `trainer`, or the default.
    #[must_use]
    pub fn salary_for(&self, trainer: &Trainer) -> Money {
        trainer.configured_salary.unwrap_or(self.default_salary)
    }

    /// Summarizes trainer payroll.
    #[must_use]
    pub fn summarize_trainers(&self, trainers: &[Trainer]) -> PayrollSummary {
        PayrollSummary {
            payroll_total: trainers.iter().map(|trainer| self.salary_for(trainer)).sum(),
            count: trainers.len(),
        }
    }

    /// Breaks entries down by kind and category, sorted by kind then category.
    ///
    /// Categories are grouped the way [`category_eq`](super::entry::category_eq)
    /// compares them.
    #[must_use]
    pub fn by_category(&self, entries: &[LedgerEntry]) -> Vec<CategoryTotal> {
        let mut groups: BTreeMap<(EntryKind, String), CategoryTotal> = BTreeMap::new();

        for entry in entries {
            let key = (entry.kind, category_key(&entry.category));
            let group = groups.entry(key).or_insert_with(|| CategoryTotal {
                kind: entry.kind,
                category: trim_category(&entry.category).to_string(),
                total: Money::ZERO,
                count: 0,
            });
            group.total += entry.amount;
            group.count += 1;
        }

        groups.into_values().collect()
    }
}
