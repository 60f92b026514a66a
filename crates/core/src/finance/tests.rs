use std::sync::Arc;

use chrono::NaiveDate;
use gymledger_shared::types::{LedgerEntryId, Money, TenantId, TrainerId};
use rust_decimal_macros::dec;

use super::*;
use crate::collector::{CollectError, FetchFailure, MultiTenantCollector};
use crate::ledger::{EntryKind, FilterCriteria, LedgerAggregator, LedgerEntry, PaymentStatusFilter};
use crate::roster::Trainer;
use crate::source::memory::InMemoryStore;
use crate::tenant::{Caller, ScopeError, Tenant, TenantScope};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service(store: InMemoryStore) -> FinanceService {
    FinanceService::new(
        MultiTenantCollector::from_store(Arc::new(store)),
        LedgerAggregator::new(Money::from_units(25_000)),
    )
}

fn salary_payment(tenant_id: TenantId, trainer_id: TrainerId, on: NaiveDate, amount: i64) -> LedgerEntry {
    LedgerEntry {
        id: LedgerEntryId::new(),
        tenant_id,
        date: on,
        kind: EntryKind::Expense,
        category: "Salary".to_string(),
        amount: Money::from_units(amount),
        description: "Monthly salary".to_string(),
        trainer_id: Some(trainer_id),
    }
}

fn income(tenant_id: TenantId, on: NaiveDate, amount: i64) -> LedgerEntry {
    LedgerEntry {
        id: LedgerEntryId::new(),
        tenant_id,
        date: on,
        kind: EntryKind::Income,
        category: "Membership".to_string(),
        amount: Money::from_units(amount),
        description: String::new(),
        trainer_id: None,
    }
}

fn trainer(tenant_id: TenantId, name: &str, joined_at: NaiveDate) -> Trainer {
    Trainer {
        id: TrainerId::new(),
        tenant_id,
        name: name.to_string(),
        contact: "0812-0000-0000".to_string(),
        configured_salary: None,
        joined_at,
    }
}

/// G1 pays T1 twice; G2's ledger is unreachable.
struct Chain {
    g1: Tenant,
    g2: Tenant,
    t1: Trainer,
    store: InMemoryStore,
}

fn chain() -> Chain {
    let g1 = Tenant::new(TenantId::new(), "Downtown");
    let g2 = Tenant::new(TenantId::new(), "Harbor");
    let t1 = trainer(g1.id, "Alex", date(2023, 1, 10));

    let store = InMemoryStore::new()
        .with_tenant(g1.clone())
        .with_tenant(g2.clone())
        .with_trainer(t1.clone())
        .with_trainer(trainer(g2.id, "Sam", date(2023, 5, 2)))
        .with_entries([
            salary_payment(g1.id, t1.id, date(2024, 10, 31), 24_000),
            salary_payment(g1.id, t1.id, date(2024, 11, 30), 25_000),
            income(g2.id, date(2024, 11, 2), 90_000),
        ])
        .with_failing_ledger(g2.id);

    Chain { g1, g2, t1, store }
}

#[tokio::test]
async fn test_summary_with_one_failed_gym() {
    let Chain { g2, store, .. } = chain();

    let summary = service(store)
        .finance_summary(&Caller::admin(), None, FilterCriteria::default())
        .await
        .unwrap();

    assert_eq!(summary.scope, TenantScope::All);
    assert_eq!(summary.expense_total, Money::from_units(49_000));
    assert_eq!(summary.income_total, Money::ZERO);
    assert_eq!(summary.balance, Money::from_units(-49_000));
    assert_eq!(summary.count, 2);
    assert_eq!(summary.failed_tenants.len(), 1);
    assert_eq!(summary.failed_tenants[0].tenant_id, g2.id);
    assert!(matches!(summary.failed_tenants[0].reason, FetchFailure::Ledger { .. }));
}

#[tokio::test]
async fn test_summary_entries_are_newest_first() {
    let Chain { store, .. } = chain();

    let summary = service(store)
        .finance_summary(&Caller::admin(), None, FilterCriteria::default())
        .await
        .unwrap();

    let dates: Vec<_> = summary.entries.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2024, 11, 30), date(2024, 10, 31)]);
    assert_eq!(summary.by_category.len(), 1);
    assert_eq!(summary.by_category[0].total, Money::from_units(49_000));
}

#[tokio::test]
async fn test_salary_view_with_one_failed_gym() {
    let Chain { g2, t1, store, .. } = chain();

    let view = service(store)
        .salary_view(&Caller::admin(), None, FilterCriteria::default())
        .await
        .unwrap();

    assert_eq!(view.count, 1);
    assert_eq!(view.trainers[0].trainer.id, t1.id);
    assert_eq!(view.trainers[0].last_payment_date, Some(date(2024, 11, 30)));
    assert_eq!(view.trainers[0].configured_or_default_salary, Money::from_units(25_000));
    assert!(view.trainers[0].uses_default_salary);
    assert_eq!(view.payroll_total, Money::from_units(25_000));
    assert_eq!(view.failed_tenants[0].tenant_id, g2.id);
}

#[tokio::test]
async fn test_salary_rows_follow_roster() {
    let Chain { g1, t1, store, .. } = chain();
    let departed = TrainerId::new();
    let store = store.with_entry(salary_payment(g1.id, departed, date(2024, 12, 31), 25_000));

    let view = service(store)
        .salary_view(&Caller::gym_owner(g1.id), None, FilterCriteria::default())
        .await
        .unwrap();

    assert_eq!(view.count, 1);
    assert_eq!(view.trainers[0].trainer.id, t1.id);
    assert_eq!(view.trainers[0].last_payment_date, Some(date(2024, 11, 30)));
}

#[tokio::test]
async fn test_salary_window_hides_later_payments() {
    let Chain { t1, store, .. } = chain();
    let october = FilterCriteria {
        month: Some(9),
        year: Some(2024),
        ..FilterCriteria::default()
    };

    let view = service(store)
        .salary_view(&Caller::admin(), None, october)
        .await
        .unwrap();

    assert_eq!(view.trainers.len(), 1);
    assert_eq!(view.trainers[0].trainer.id, t1.id);
    assert_eq!(view.trainers[0].last_payment_date, Some(date(2024, 10, 31)));
}

#[tokio::test]
async fn test_unpaid_trainer_matches_on_join_date() {
    let gym = Tenant::new(TenantId::new(), "Uptown");
    let newcomer = trainer(gym.id, "Rin", date(2024, 3, 1));
    let store = InMemoryStore::new()
        .with_tenant(gym)
        .with_trainer(newcomer.clone());
    let march = FilterCriteria {
        month: Some(2),
        year: Some(2024),
        ..FilterCriteria::default()
    };

    let view = service(store)
        .salary_view(&Caller::admin(), None, march)
        .await
        .unwrap();

    assert_eq!(view.count, 1);
    assert_eq!(view.trainers[0].trainer.id, newcomer.id);
    assert_eq!(view.trainers[0].last_payment_date, None);
}

#[tokio::test]
async fn test_payment_status_filter() {
    let Chain { g1, t1, store, .. } = chain();
    let store = store.with_trainer(trainer(g1.id, "Noor", date(2024, 6, 1)));
    let service = service(store);

    let paid = service
        .salary_view(
            &Caller::admin(),
            None,
            FilterCriteria {
                payment_status: Some(PaymentStatusFilter::Paid),
                ..FilterCriteria::default()
            },
        )
        .await
        .unwrap();
    let unpaid = service
        .salary_view(
            &Caller::admin(),
            None,
            FilterCriteria {
                payment_status: Some(PaymentStatusFilter::Unpaid),
                ..FilterCriteria::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(paid.count, 1);
    assert_eq!(paid.trainers[0].trainer.id, t1.id);
    assert_eq!(unpaid.count, 1);
    assert_eq!(unpaid.trainers[0].trainer.name, "Noor");
}

#[tokio::test]
async fn test_configured_salary_overrides_default() {
    let gym = Tenant::new(TenantId::new(), "Uptown");
    let mut senior = trainer(gym.id, "Dana", date(2022, 2, 1));
    senior.configured_salary = Some(Money::new(dec!(40000.50)));
    let junior = trainer(gym.id, "Eli", date(2024, 2, 1));
    let store = InMemoryStore::new()
        .with_tenant(gym)
        .with_trainer(senior)
        .with_trainer(junior);

    let view = service(store)
        .salary_view(&Caller::admin(), None, FilterCriteria::default())
        .await
        .unwrap();

    assert!(!view.trainers[0].uses_default_salary);
    assert!(view.trainers[1].uses_default_salary);
    assert_eq!(view.payroll_total, Money::new(dec!(65000.50)));
}

#[tokio::test]
async fn test_gym_owner_is_confined_to_own_gym() {
    let Chain { g1, g2, store, .. } = chain();

    let summary = service(store)
        .finance_summary(
            &Caller::gym_owner(g1.id),
            Some(TenantScope::One(g2.id)),
            FilterCriteria::default(),
        )
        .await
        .unwrap();

    assert_eq!(summary.scope, TenantScope::One(g1.id));
    assert!(summary.failed_tenants.is_empty());
    assert!(summary.entries.iter().all(|e| e.tenant_id == g1.id));
}

#[tokio::test]
async fn test_gym_owner_requesting_all_gets_own_gym() {
    let Chain { g1, store, .. } = chain();

    let view = service(store)
        .salary_view(
            &Caller::gym_owner(g1.id),
            Some(TenantScope::All),
            FilterCriteria::default(),
        )
        .await
        .unwrap();

    assert_eq!(view.scope, TenantScope::One(g1.id));
    assert!(view.trainers.iter().all(|row| row.trainer.tenant_id == g1.id));
}

#[tokio::test]
async fn test_admin_can_narrow_to_one_gym() {
    let Chain { g1, store, .. } = chain();

    let summary = service(store)
        .finance_summary(&Caller::admin(), Some(TenantScope::One(g1.id)), FilterCriteria::default())
        .await
        .unwrap();

    assert_eq!(summary.scope, TenantScope::One(g1.id));
    assert_eq!(summary.count, 2);
}

#[tokio::test]
async fn test_gym_owner_without_gym_is_rejected() {
    let Chain { store, .. } = chain();
    let orphan = Caller {
        tenant_id: None,
        ..Caller::gym_owner(TenantId::new())
    };

    let err = service(store)
        .finance_summary(&orphan, None, FilterCriteria::default())
        .await
        .unwrap_err();

    assert_eq!(err, FinanceError::Scope(ScopeError::MissingTenant));
}

#[tokio::test]
async fn test_invalid_month_is_rejected() {
    let Chain { store, .. } = chain();
    let criteria = FilterCriteria {
        month: Some(12),
        ..FilterCriteria::default()
    };

    let err = service(store)
        .finance_summary(&Caller::admin(), None, criteria)
        .await
        .unwrap_err();

    assert!(matches!(err, FinanceError::InvalidCriteria(_)));
}

#[tokio::test]
async fn test_directory_failure_propagates() {
    let Chain { store, .. } = chain();

    let err = service(store.with_directory_down())
        .finance_summary(&Caller::admin(), None, FilterCriteria::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FinanceError::Collect(CollectError::Directory(_))));
}

#[tokio::test]
async fn test_empty_chain_yields_zeros() {
    let service = service(InMemoryStore::new());

    let summary = service
        .finance_summary(&Caller::admin(), None, FilterCriteria::default())
        .await
        .unwrap();
    let view = service
        .salary_view(&Caller::admin(), None, FilterCriteria::default())
        .await
        .unwrap();

    assert_eq!(summary.income_total, Money::ZERO);
    assert_eq!(summary.expense_total, Money::ZERO);
    assert_eq!(summary.balance, Money::ZERO);
    assert_eq!(summary.count, 0);
    assert!(summary.by_category.is_empty());
    assert_eq!(view.payroll_total, Money::ZERO);
    assert_eq!(view.count, 0);
}
