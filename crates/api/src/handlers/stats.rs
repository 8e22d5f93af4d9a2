//! Handler for spending statistics.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use pocket_ledger_core::stats::DateRange;
use pocket_ledger_db::models::stats::ExpenseStats;
use pocket_ledger_db::repositories::StatsRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::StatsParams;
use crate::state::AppState;

/// Stats body: the resolved range followed by the aggregates.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(flatten)]
    pub stats: ExpenseStats,
}

/// GET /api/expenses/stats
///
/// Total, per-category, and per-day spend for `[startDate, endDate]`.
/// Without both bounds the last 30 days (UTC) are used.
pub async fn get_stats(
    State(state): State<AppState>,
    query: Result<Query<StatsParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query?;
    let range = DateRange::resolve_or_default(
        params.start_date(),
        params.end_date(),
        Utc::now().date_naive(),
    )?;

    let stats = StatsRepo::expense_stats(&state.pool, range.start, range.end).await?;

    tracing::debug!(
        start = %range.start,
        end = %range.end,
        total = stats.total,
        "Computed expense stats",
    );

    Ok(Json(StatsResponse {
        start_date: range.start,
        end_date: range.end,
        stats,
    }))
}
