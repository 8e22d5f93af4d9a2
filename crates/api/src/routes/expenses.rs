//! Route definitions for expenses, mounted at `/api/expenses`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{expenses, stats};
use crate::state::AppState;

/// ```text
/// GET    /        -> list_expenses
/// POST   /        -> create_expense
/// GET    /stats   -> get_stats
/// GET    /{id}    -> get_expense
/// PUT    /{id}    -> update_expense
/// DELETE /{id}    -> delete_expense
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route("/stats", get(stats::get_stats))
        .route(
            "/{id}",
            get(expenses::get_expense)
                .put(expenses::update_expense)
                .delete(expenses::delete_expense),
        )
}
