//! Property-based tests for ledger aggregation.

use gymledger_shared::types::Money;
use proptest::prelude::*;

use super::aggregate::LedgerAggregator;
use super::entry::EntryKind;
use super::strategies::{amount_strategy, entry_strategy, trainer_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// balance == income_total - expense_total, and both totals are non-negative.
    #[test]
    fn prop_balance_identity(entries in prop::collection::vec(entry_strategy(), 0..80)) {
        let summary = LedgerAggregator::new(Money::from_units(25_000)).summarize(&entries);

        prop_assert_eq!(summary.balance, summary.income_total - summary.expense_total);
        prop_assert!(!summary.income_total.is_negative());
        prop_assert!(!summary.expense_total.is_negative());
        prop_assert_eq!(summary.count, entries.len());
    }

    /// Totals equal independent per-kind sums.
    #[test]
    fn prop_totals_match_per_kind_sums(entries in prop::collection::vec(entry_strategy(), 0..80)) {
        let summary = LedgerAggregator::new(Money::ZERO).summarize(&entries);
        let income: Money = entries.iter().filter(|e| e.kind == EntryKind::Income).map(|e| e.amount).sum();
        let expense: Money = entries.iter().filter(|e| e.kind == EntryKind::Expense).map(|e| e.amount).sum();

        prop_assert_eq!(summary.income_total, income);
        prop_assert_eq!(summary.expense_total, expense);
    }

    /// The category breakdown adds back up to the summary totals.
    #[test]
    fn prop_category_breakdown_sums_to_totals(entries in prop::collection::vec(entry_strategy(), 0..80)) {
        let aggregator = LedgerAggregator::new(Money::ZERO);
        let summary = aggregator.summarize(&entries);
        let breakdown = aggregator.by_category(&entries);

        let income: Money = breakdown.iter().filter(|c| c.kind == EntryKind::Income).map(|c| c.total).sum();
        let expense: Money = breakdown.iter().filter(|c| c.kind == EntryKind::Expense).map(|c| c.total).sum();
        let count: usize = breakdown.iter().map(|c| c.count).sum();

        prop_assert_eq!(income, summary.income_total);
        prop_assert_eq!(expense, summary.expense_total);
        prop_assert_eq!(count, entries.len());
    }

    /// Payroll is configured salaries plus the default for each trainer without one.
    #[test]
    fn prop_payroll_total(
        trainers in prop::collection::vec(trainer_strategy(), 0..20),
        default_salary in amount_strategy(),
    ) {
        let payroll = LedgerAggregator::new(default_salary).summarize_trainers(&trainers);

        let configured: Money = trainers.iter().filter_map(|t| t.configured_salary).sum();
        let defaults: Money = trainers
            .iter()
            .filter(|t| t.configured_salary.is_none())
            .map(|_| default_salary)
            .sum();

        prop_assert_eq!(payroll.payroll_total, configured + defaults);
        prop_assert_eq!(payroll.count, trainers.len());
    }
}
