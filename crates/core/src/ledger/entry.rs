//! Ledger entry domain types.

use chrono::NaiveDate;
use gymledger_shared::types::{LedgerEntryId, Money, TenantId, TrainerId};
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry.
///
/// Amounts are never negative; the kind alone says which way money moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money received (memberships, class fees).
    Income,
    /// Money spent (salaries, rent, equipment).
    Expense,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl std::str::FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown entry kind: {s}")),
        }
    }
}

/// A single dated financial record of a gym.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier for this entry.
    pub id: LedgerEntryId,
    /// Gym that owns the entry.
    pub tenant_id: TenantId,
    /// Booking date.
    pub date: NaiveDate,
    /// Income or expense.
    pub kind: EntryKind,
    /// Free-text category ("Salary", "Rent", "Membership").
    pub category: String,
    /// Non-negative amount.
    pub amount: Money,
    /// Description shown in the ledger table.
    pub description: String,
    /// Trainer paid by this entry, for salary payments.
    pub trainer_id: Option<TrainerId>,
}

/// Filter pushed down to a ledger source.
///
/// Month, year and gym scoping are applied after collection; only the
/// predicates a store can index on travel with the fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerQuery {
    /// Only entries of this kind.
    pub kind: Option<EntryKind>,
    /// Only entries in this category.
    pub category: Option<String>,
}

impl LedgerQuery {
    /// Returns true if `entry` satisfies this query.
    #[must_use]
    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        self.kind.is_none_or(|kind| entry.kind == kind)
            && self
                .category
                .as_deref()
                .is_none_or(|category| category_eq(&entry.category, category))
    }
}

/// Category comparison used everywhere categories are matched.
///
/// Categories are free text typed into dashboard forms, so surrounding
/// spaces and letter case are not significant.
#[must_use]
pub fn category_eq(a: &str, b: &str) -> bool {
    category_key(a) == category_key(b)
}

/// Normalized form of a category, as compared by [`category_eq`].
///
/// Strips spaces only and lowercases with Unicode rules, the same as SQL
/// `LOWER(TRIM(category))`.
#[must_use]
pub fn category_key(category: &str) -> String {
    trim_category(category).to_lowercase()
}

/// A category without its surrounding spaces.
#[must_use]
pub fn trim_category(category: &str) -> &str {
    category.trim_matches(' ')
}
