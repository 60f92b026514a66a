//! Trainer payment history resolution.

use std::collections::HashMap;

use chrono::NaiveDate;
use gymledger_shared::types::TrainerId;
use serde::{Deserialize, Serialize};

use super::entry::LedgerEntry;
use crate::roster::Trainer;

/// Most recent payment date per trainer.
pub type PaymentHistory = HashMap<TrainerId, NaiveDate>;

/// Last payment of one trainer, derived per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatus {
    /// The trainer.
    pub trainer_id: TrainerId,
    /// Date of the most recent visible payment.
    pub last_payment_date: Option<NaiveDate>,
}

/// Reduces ledger entries to the latest payment date of every trainer.
pub struct PaymentHistoryResolver;

impl PaymentHistoryResolver {
    /// Resolves the most recent payment date per trainer.
    ///
    /// Payments are ordered newest first (stable, so equal dates keep input
    /// order) and folded so the first date seen for a trainer wins. The
    /// result equals grouping by trainer and taking the maximum date.
    /// Entries without a trainer are ignored. Trainers missing from the
    /// roster are kept; callers join on the roster.
    #[must_use]
    pub fn resolve(entries: &[LedgerEntry]) -> PaymentHistory {
        let mut payments: Vec<(TrainerId, NaiveDate)> = entries
            .iter()
            .filter_map(|entry| entry.trainer_id.map(|trainer_id| (trainer_id, entry.date)))
            .collect();
        payments.sort_by(|a, b| b.1.cmp(&a.1));

        payments
            .into_iter()
            .fold(PaymentHistory::new(), |mut latest, (trainer_id, date)| {
                latest.entry(trainer_id).or_insert(date);
                latest
            })
    }

    /// Joins a history with a roster, one status per trainer in roster order.
    #[must_use]
    pub fn statuses(trainers: &[Trainer], history: &PaymentHistory) -> Vec<PaymentStatus> {
        trainers
            .iter()
            .map(|trainer| PaymentStatus {
                trainer_id: trainer.id,
                last_payment_date: history.get(&trainer.id).copied(),
            })
            .collect()
    }
}
