//! Proptest strategies shared by the ledger property tests.

use chrono::{Days, NaiveDate};
use gymledger_shared::types::{LedgerEntryId, Money, TenantId, TrainerId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::entry::{EntryKind, LedgerEntry};
use super::filter::{FilterCriteria, PaymentStatusFilter};
use crate::roster::Trainer;
use crate::tenant::TenantScope;

const CATEGORIES: [&str; 4] = ["Salary", "Rent", "Membership", "Equipment"];

/// A small fixed pool of gyms so generated data collides on tenants.
pub fn tenant_pool() -> [TenantId; 3] {
    [1u128, 2, 3].map(|n| TenantId::from_uuid(Uuid::from_u128(n)))
}

/// A small fixed pool of trainers so generated payments collide on trainers.
pub fn trainer_pool() -> [TrainerId; 5] {
    [11u128, 12, 13, 14, 15].map(|n| TrainerId::from_uuid(Uuid::from_u128(n)))
}

/// Dates between 2022-01-01 and roughly the end of 2025.
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..1_460).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2022, 1, 1)
            .and_then(|start| start.checked_add_days(Days::new(offset)))
            .unwrap_or_default()
    })
}

/// Non-negative amounts from 0.00 to 1,000,000.00.
pub fn amount_strategy() -> impl Strategy<Value = Money> {
    (0i64..100_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Income or expense.
pub fn kind_strategy() -> impl Strategy<Value = EntryKind> {
    prop_oneof![Just(EntryKind::Income), Just(EntryKind::Expense)]
}

/// A ledger entry drawn from the fixed pools.
pub fn entry_strategy() -> impl Strategy<Value = LedgerEntry> {
    (
        0usize..3,
        date_strategy(),
        kind_strategy(),
        0usize..CATEGORIES.len(),
        amount_strategy(),
        proptest::option::of(0usize..5),
    )
        .prop_map(|(tenant, date, kind, category, amount, trainer)| LedgerEntry {
            id: LedgerEntryId::new(),
            tenant_id: tenant_pool()[tenant],
            date,
            kind,
            category: CATEGORIES[category].to_string(),
            amount,
            description: String::new(),
            trainer_id: trainer.map(|i| trainer_pool()[i]),
        })
}

/// A trainer from the fixed pool with arbitrary gym, salary and join date.
pub fn trainer_strategy() -> impl Strategy<Value = Trainer> {
    (
        0usize..5,
        0usize..3,
        proptest::option::of(amount_strategy()),
        date_strategy(),
    )
        .prop_map(|(id, tenant, configured_salary, joined_at)| Trainer {
            id: trainer_pool()[id],
            tenant_id: tenant_pool()[tenant],
            name: format!("Trainer {id}"),
            contact: String::new(),
            configured_salary,
            joined_at,
        })
}

/// Arbitrary filter criteria over the fixed pools.
pub fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        proptest::option::of(0usize..3),
        proptest::option::of(0u32..12),
        proptest::option::of(2022i32..2026),
        proptest::option::of(kind_strategy()),
        proptest::option::of(0usize..CATEGORIES.len()),
        proptest::option::of(prop_oneof![
            Just(PaymentStatusFilter::Paid),
            Just(PaymentStatusFilter::Unpaid)
        ]),
    )
        .prop_map(|(tenant, month, year, kind, category, payment_status)| FilterCriteria {
            tenant_scope: TenantScope::from(tenant.map(|i| tenant_pool()[i])),
            month,
            year,
            kind,
            category: category.map(|i| CATEGORIES[i].to_lowercase()),
            payment_status,
        })
}
