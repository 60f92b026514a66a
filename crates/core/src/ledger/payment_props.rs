//! Property-based tests for payment history resolution.

use std::collections::HashMap;

use chrono::NaiveDate;
use gymledger_shared::types::TrainerId;
use proptest::prelude::*;

use super::entry::LedgerEntry;
use super::payment::PaymentHistoryResolver;
use super::strategies::entry_strategy;

/// Reference definition: group by trainer, take the maximum date.
fn group_max(entries: &[LedgerEntry]) -> HashMap<TrainerId, NaiveDate> {
    let mut latest: HashMap<TrainerId, NaiveDate> = HashMap::new();
    for entry in entries {
        if let Some(trainer_id) = entry.trainer_id {
            latest
                .entry(trainer_id)
                .and_modify(|date| *date = (*date).max(entry.date))
                .or_insert(entry.date);
        }
    }
    latest
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* entry set, resolution SHALL equal group-by-trainer-max-date.
    #[test]
    fn prop_resolve_equals_group_max(entries in prop::collection::vec(entry_strategy(), 0..60)) {
        prop_assert_eq!(PaymentHistoryResolver::resolve(&entries), group_max(&entries));
    }

    /// Input order does not change the result.
    #[test]
    fn prop_resolve_is_order_independent(entries in prop::collection::vec(entry_strategy(), 0..60)) {
        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(
            PaymentHistoryResolver::resolve(&entries),
            PaymentHistoryResolver::resolve(&reversed)
        );
    }

    /// Only trainers that appear on some entry appear in the history.
    #[test]
    fn prop_resolve_only_contains_paid_trainers(entries in prop::collection::vec(entry_strategy(), 0..60)) {
        let history = PaymentHistoryResolver::resolve(&entries);
        for trainer_id in history.keys() {
            prop_assert!(entries.iter().any(|e| e.trainer_id == Some(*trainer_id)));
        }
    }
}
