//! Finance service.

use tracing::{Span, debug, info, instrument};

use super::error::FinanceError;
use super::types::{FinanceSummary, SalaryView, TrainerSalaryRow};
use crate::collector::{Collection, MultiTenantCollector};
use crate::ledger::{
    FilterCriteria, FilterPipeline, LedgerAggregator, LedgerEntry, PaymentHistoryResolver,
};
use crate::tenant::{Caller, TenantScope, resolve_scope};

/// Builds the finance summary and salary view for a caller.
#[derive(Debug, Clone)]
pub struct FinanceService {
    collector: MultiTenantCollector,
    aggregator: LedgerAggregator,
}

impl FinanceService {
    /// Creates a new finance service.
    #[must_use]
    pub fn new(collector: MultiTenantCollector, aggregator: LedgerAggregator) -> Self {
        Self {
            collector,
            aggregator,
        }
    }

    /// Ledger totals for the gyms the caller may see.
    ///
    /// A gym owner always gets their own gym, whatever scope was requested.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError` for invalid criteria, a gym owner without a
    /// gym, an unreadable gym directory or an unknown gym.
    #[instrument(skip_all, fields(role = %caller.role, scope = tracing::field::Empty))]
    pub async fn finance_summary(
        &self,
        caller: &Caller,
        requested_scope: Option<TenantScope>,
        criteria: FilterCriteria,
    ) -> Result<FinanceSummary, FinanceError> {
        let (criteria, collection) = self.collect(caller, requested_scope, criteria).await?;

        let entries = newest_first(FilterPipeline::filter_entries(&collection.entries, &criteria));
        let summary = self.aggregator.summarize(&entries);
        let by_category = self.aggregator.by_category(&entries);

        info!(
            count = summary.count,
            income_total = %summary.income_total,
            expense_total = %summary.expense_total,
            failed_tenants = collection.failed_tenants.len(),
            "Finance summary built"
        );

        Ok(FinanceSummary {
            scope: criteria.tenant_scope,
            income_total: summary.income_total,
            expense_total: summary.expense_total,
            balance: summary.balance,
            count: summary.count,
            by_category,
            entries,
            failed_tenants: collection.failed_tenants,
            rejected_entries: collection.rejected_entries,
        })
    }

    /// Trainer salaries for the gyms the caller may see.
    ///
    /// Last payment dates come from the entries that pass the same criteria,
    /// so narrowing the window hides payments outside it.
    ///
    /// # Errors
    ///
    /// Same as [`finance_summary`](Self::finance_summary).
    #[instrument(skip_all, fields(role = %caller.role, scope = tracing::field::Empty))]
    pub async fn salary_view(
        &self,
        caller: &Caller,
        requested_scope: Option<TenantScope>,
        criteria: FilterCriteria,
    ) -> Result<SalaryView, FinanceError> {
        let (criteria, collection) = self.collect(caller, requested_scope, criteria).await?;

        let visible_entries = FilterPipeline::filter_entries(&collection.entries, &criteria);
        let history = PaymentHistoryResolver::resolve(&visible_entries);
        let trainers = FilterPipeline::filter_trainers(&collection.trainers, &history, &criteria);
        let payroll = self.aggregator.summarize_trainers(&trainers);

        let statuses = PaymentHistoryResolver::statuses(&trainers, &history);
        let rows: Vec<TrainerSalaryRow> = trainers
            .into_iter()
            .zip(statuses)
            .map(|(trainer, status)| TrainerSalaryRow {
                last_payment_date: status.last_payment_date,
                configured_or_default_salary: self.aggregator.salary_for(&trainer),
                uses_default_salary: trainer.configured_salary.is_none(),
                trainer,
            })
            .collect();

        info!(
            count = payroll.count,
            payroll_total = %payroll.payroll_total,
            failed_tenants = collection.failed_tenants.len(),
            "Salary view built"
        );

        Ok(SalaryView {
            scope: criteria.tenant_scope,
            trainers: rows,
            payroll_total: payroll.payroll_total,
            count: payroll.count,
            failed_tenants: collection.failed_tenants,
            rejected_trainers: collection.rejected_trainers,
        })
    }

    /// Validates criteria, enforces scope and collects the gyms in scope.
    async fn collect(
        &self,
        caller: &Caller,
        requested_scope: Option<TenantScope>,
        criteria: FilterCriteria,
    ) -> Result<(FilterCriteria, Collection), FinanceError> {
        criteria.validate()?;
        let scope = resolve_scope(caller, requested_scope)?;
        Span::current().record("scope", tracing::field::display(scope));

        if requested_scope.is_some_and(|requested| requested != scope) {
            debug!(requested = ?requested_scope, effective = %scope, "Requested scope overridden");
        }

        let criteria = criteria.with_scope(scope);
        let collection = self.collector.collect(scope, &criteria).await?;
        Ok((criteria, collection))
    }
}

/// Orders entries by date, newest first; equal dates keep their order.
fn newest_first(mut entries: Vec<LedgerEntry>) -> Vec<LedgerEntry> {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}
