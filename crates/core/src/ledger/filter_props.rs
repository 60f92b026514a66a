//! Property-based tests for the filter pipeline.

use proptest::prelude::*;

use super::filter::FilterPipeline;
use super::payment::PaymentHistoryResolver;
use super::strategies::{criteria_strategy, entry_strategy, trainer_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// filter(filter(E, C), C) == filter(E, C)
    #[test]
    fn prop_filter_entries_idempotent(
        entries in prop::collection::vec(entry_strategy(), 0..50),
        criteria in criteria_strategy(),
    ) {
        let once = FilterPipeline::filter_entries(&entries, &criteria);
        let twice = FilterPipeline::filter_entries(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    /// The same holds for trainers against a fixed history.
    #[test]
    fn prop_filter_trainers_idempotent(
        entries in prop::collection::vec(entry_strategy(), 0..50),
        trainers in prop::collection::vec(trainer_strategy(), 0..10),
        criteria in criteria_strategy(),
    ) {
        let history = PaymentHistoryResolver::resolve(&entries);
        let once = FilterPipeline::filter_trainers(&trainers, &history, &criteria);
        let twice = FilterPipeline::filter_trainers(&once, &history, &criteria);
        prop_assert_eq!(once, twice);
    }

    /// Filtering keeps a subsequence of the input.
    #[test]
    fn prop_filter_entries_preserves_order(
        entries in prop::collection::vec(entry_strategy(), 0..50),
        criteria in criteria_strategy(),
    ) {
        let filtered = FilterPipeline::filter_entries(&entries, &criteria);
        let mut remaining = entries.iter();
        for kept in &filtered {
            prop_assert!(remaining.any(|e| e == kept));
        }
    }

    /// Every kept entry satisfies the criteria, every dropped one does not.
    #[test]
    fn prop_filter_entries_is_exact(
        entries in prop::collection::vec(entry_strategy(), 0..50),
        criteria in criteria_strategy(),
    ) {
        let filtered = FilterPipeline::filter_entries(&entries, &criteria);
        let expected = entries.iter().filter(|e| criteria.matches_entry(e)).count();
        prop_assert_eq!(filtered.len(), expected);
        prop_assert!(filtered.iter().all(|e| criteria.matches_entry(e)));
    }
}
