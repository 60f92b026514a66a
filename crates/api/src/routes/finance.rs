//! Finance summary and salary view routes.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use gymledger_core::finance::{FinanceSummary, SalaryView};
use gymledger_core::ledger::{EntryKind, FilterCriteria, PaymentStatusFilter};
use gymledger_core::tenant::TenantScope;
use gymledger_shared::AppError;
use gymledger_shared::types::TenantId;
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::info;

use crate::{ApiError, AppState, middleware::AuthUser};

/// Creates the finance routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/finance/summary", get(finance_summary))
        .route("/finance/salaries", get(salary_view))
}

/// Query parameters shared by both finance views.
///
/// An empty value is treated as absent for every parameter.
#[derive(Debug, Default, Deserialize)]
pub struct FinanceQuery {
    /// Restrict to one gym. Ignored for gym owners.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub tenant_id: Option<TenantId>,
    /// Zero-based month (0 = January).
    #[serde(default, deserialize_with = "empty_as_none")]
    pub month: Option<u32>,
    /// Calendar year.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
    /// "income" or "expense".
    pub kind: Option<String>,
    /// Category, matched case-insensitively.
    pub category: Option<String>,
    /// "paid" or "unpaid"; salary view only.
    pub status: Option<String>,
}

impl FinanceQuery {
    /// The scope asked for, before role enforcement.
    fn requested_scope(&self) -> Option<TenantScope> {
        self.tenant_id.map(TenantScope::One)
    }

    fn into_criteria(self) -> Result<FilterCriteria, ApiError> {
        let kind = non_empty(self.kind)
            .map(|kind| kind.parse::<EntryKind>())
            .transpose()
            .map_err(|e| ApiError(AppError::Validation(e)))?;

        let payment_status = non_empty(self.status)
            .map(|status| parse_payment_status(&status))
            .transpose()?;

        Ok(FilterCriteria {
            tenant_scope: TenantScope::All,
            month: self.month,
            year: self.year,
            kind,
            category: non_empty(self.category),
            payment_status,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses an optional query value, treating `?month=` like a missing key.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    non_empty(Option::<String>::deserialize(deserializer)?)
        .map(|value| value.trim().parse().map_err(de::Error::custom))
        .transpose()
}

fn parse_payment_status(value: &str) -> Result<PaymentStatusFilter, ApiError> {
    match value.trim().to_lowercase().as_str() {
        "paid" => Ok(PaymentStatusFilter::Paid),
        "unpaid" => Ok(PaymentStatusFilter::Unpaid),
        _ => Err(ApiError(AppError::Validation(format!(
            "Unknown payment status: {value}"
        )))),
    }
}

fn parse_query(query: Result<Query<FinanceQuery>, QueryRejection>) -> Result<FinanceQuery, ApiError> {
    query
        .map(|Query(query)| query)
        .map_err(|e| ApiError(AppError::Validation(e.body_text())))
}

/// Response for the finance summary.
#[derive(Debug, Serialize)]
pub struct FinanceSummaryResponse {
    /// Currency of every amount.
    pub currency: String,
    /// The summary.
    #[serde(flatten)]
    pub summary: FinanceSummary,
}

/// Response for the salary view.
#[derive(Debug, Serialize)]
pub struct SalaryViewResponse {
    /// Currency of every amount.
    pub currency: String,
    /// The salary view.
    #[serde(flatten)]
    pub view: SalaryView,
}

/// GET `/finance/summary` - Ledger totals for the gyms the caller may see.
async fn finance_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<FinanceQuery>, QueryRejection>,
) -> Result<Json<FinanceSummaryResponse>, ApiError> {
    let query = parse_query(query)?;
    let requested = query.requested_scope();
    let criteria = query.into_criteria()?;

    let summary = state
        .finance
        .finance_summary(&auth.caller(), requested, criteria)
        .await?;

    info!(
        user_id = %auth.claims().user_id(),
        scope = %summary.scope,
        count = summary.count,
        failed_tenants = summary.failed_tenants.len(),
        "Finance summary served"
    );

    Ok(Json(FinanceSummaryResponse {
        currency: state.currency.to_string(),
        summary,
    }))
}

/// GET `/finance/salaries` - Trainer salaries for the gyms the caller may see.
async fn salary_view(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<FinanceQuery>, QueryRejection>,
) -> Result<Json<SalaryViewResponse>, ApiError> {
    let query = parse_query(query)?;
    let requested = query.requested_scope();
    let criteria = query.into_criteria()?;

    let view = state
        .finance
        .salary_view(&auth.caller(), requested, criteria)
        .await?;

    info!(
        user_id = %auth.claims().user_id(),
        scope = %view.scope,
        count = view.count,
        failed_tenants = view.failed_tenants.len(),
        "Salary view served"
    );

    Ok(Json(SalaryViewResponse {
        currency: state.currency.to_string(),
        view,
    }))
}
