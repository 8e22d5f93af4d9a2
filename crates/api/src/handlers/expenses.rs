//! Handlers for expense records.
//!
//! Writes are validated with the rules in `pocket_ledger_core::expense` and
//! the referenced category is checked before touching the table.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pocket_ledger_core::error::CoreError;
use pocket_ledger_core::expense::{parse_expense_date, validate_amount};
use pocket_ledger_core::stats::DateRange;
use pocket_ledger_core::types::DbId;
use pocket_ledger_db::models::expense::{CreateExpense, ExpensePatch};
use pocket_ledger_db::repositories::{CategoryRepo, ExpenseRepo};
use pocket_ledger_db::DbPool;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::query::ExpenseListParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Request body for `POST /api/expenses`.
///
/// Fields are optional here so a missing one is reported as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: Option<f64>,
    pub category_id: Option<DbId>,
    pub date: Option<String>,
    pub note: Option<String>,
}

/// Request body for `PUT /api/expenses/{id}`. Only supplied fields change.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateExpenseRequest {
    pub amount: Option<f64>,
    pub category_id: Option<DbId>,
    pub date: Option<String>,
    pub note: Option<String>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// GET /api/expenses
///
/// With `startDate` and `endDate`, list expenses in that inclusive range.
/// Otherwise with `categoryId`, list that category's expenses. Otherwise
/// list everything. Results are most recent first.
pub async fn list_expenses(
    State(state): State<AppState>,
    query: Result<Query<ExpenseListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query?;
    let range = DateRange::resolve_optional(params.start_date(), params.end_date())?;

    let expenses = match (range, params.category_id()?) {
        (Some(range), _) => {
            ExpenseRepo::list_by_date_range(&state.pool, range.start, range.end).await?
        }
        (None, Some(category_id)) => ExpenseRepo::list_by_category(&state.pool, category_id).await?,
        (None, None) => ExpenseRepo::list(&state.pool).await?,
    };

    Ok(Json(expenses))
}

/// GET /api/expenses/{id}
pub async fn get_expense(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let expense = ExpenseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))?;

    Ok(Json(expense))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// POST /api/expenses
///
/// Record an expense. `amount`, `category_id` and `date` are required;
/// `note` defaults to an empty string.
pub async fn create_expense(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let input = validate_create(input)?;
    ensure_category_exists(&state.pool, input.category_id).await?;

    let expense = ExpenseRepo::create(&state.pool, &input).await?;

    tracing::info!(
        expense_id = expense.id,
        category_id = expense.category_id,
        amount = expense.amount,
        date = %expense.date,
        "Expense created",
    );

    Ok((StatusCode::CREATED, Json(expense)))
}

/// PUT /api/expenses/{id}
///
/// Update any of `amount`, `category_id`, `date`, `note`. Supplied values
/// are validated with the same rules as creation.
pub async fn update_expense(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateExpenseRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let patch = validate_update(input)?;
    if let Some(category_id) = patch.category_id {
        ensure_category_exists(&state.pool, category_id).await?;
    }

    let expense = ExpenseRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))?;

    tracing::info!(expense_id = id, "Expense updated");

    Ok(Json(expense))
}

/// DELETE /api/expenses/{id}
pub async fn delete_expense(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let deleted = ExpenseRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }));
    }

    tracing::info!(expense_id = id, "Expense deleted");

    Ok(Json(SuccessResponse::ok()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn required<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

fn validate_create(input: CreateExpenseRequest) -> Result<CreateExpense, CoreError> {
    let amount = validate_amount(required(input.amount, "amount")?)?;
    let category_id = required(input.category_id, "category_id")?;
    let date = parse_expense_date(&required(input.date, "date")?)?;

    Ok(CreateExpense {
        amount,
        category_id,
        date,
        note: input.note.unwrap_or_default(),
    })
}

fn validate_update(input: UpdateExpenseRequest) -> Result<ExpensePatch, CoreError> {
    let patch = ExpensePatch {
        amount: input.amount.map(validate_amount).transpose()?,
        category_id: input.category_id,
        date: input.date.as_deref().map(parse_expense_date).transpose()?,
        note: input.note,
    };

    if patch.is_empty() {
        return Err(CoreError::Validation("No fields to update".to_string()));
    }
    Ok(patch)
}

async fn ensure_category_exists(pool: &DbPool, category_id: DbId) -> AppResult<()> {
    if !CategoryRepo::exists(pool, category_id).await? {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Category {category_id} does not exist"
        ))));
    }
    Ok(())
}
