//! Handlers for category management.
//!
//! Default categories can be edited but never deleted. All endpoints sit
//! behind the auth layer.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pocket_ledger_core::category::validate_required;
use pocket_ledger_core::error::CoreError;
use pocket_ledger_core::types::DbId;
use pocket_ledger_db::models::category::{CategoryPatch, CreateCategory};
use pocket_ledger_db::repositories::CategoryRepo;

use crate::error::{is_foreign_key_violation, AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/categories
///
/// List all categories in id order.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    Ok(Json(category))
}

/// POST /api/categories
///
/// Create a user category. `name`, `icon` and `color` are all required.
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategory>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;

    validate_required("name", &input.name)?;
    validate_required("icon", &input.icon)?;
    validate_required("color", &input.color)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/{id}
///
/// Update any of `name`, `icon`, `color`. Omitted fields are left alone.
pub async fn update_category(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<CategoryPatch>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    validate_category_patch(&patch)?;

    let category = CategoryRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// Delete a user category. Default categories and unknown ids yield 404;
/// a category still referenced by expenses yields 409.
pub async fn delete_category(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let deleted = CategoryRepo::delete(&state.pool, id)
        .await
        .map_err(|err| {
            if is_foreign_key_violation(&err) {
                AppError::Core(CoreError::Conflict(format!(
                    "Category {id} is still used by existing expenses"
                )))
            } else {
                AppError::Database(err)
            }
        })?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(Json(SuccessResponse::ok()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject empty patches and blank values.
fn validate_category_patch(patch: &CategoryPatch) -> Result<(), CoreError> {
    if patch.is_empty() {
        return Err(CoreError::Validation("No fields to update".to_string()));
    }

    for (field, value) in [
        ("name", &patch.name),
        ("icon", &patch.icon),
        ("color", &patch.color),
    ] {
        if let Some(value) = value {
            validate_required(field, value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_patch_rejected() {
        assert_matches!(
            validate_category_patch(&CategoryPatch::default()),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn blank_patch_value_rejected() {
        let patch = CategoryPatch {
            icon: Some("  ".to_string()),
            ..Default::default()
        };
        assert_matches!(validate_category_patch(&patch), Err(CoreError::Validation(_)));
    }

    #[test]
    fn partial_patch_accepted() {
        let patch = CategoryPatch {
            name: Some(" Pets ".to_string()),
            ..Default::default()
        };
        assert!(validate_category_patch(&patch).is_ok());
    }
}
