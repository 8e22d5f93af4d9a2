pub mod categories;
pub mod expenses;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                  list, create
/// /categories/{id}             get, update, delete
///
/// /expenses                    list (?startDate&endDate | ?categoryId), create
/// /expenses/stats              aggregates (?startDate&endDate)
/// /expenses/{id}               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/expenses", expenses::router())
}
