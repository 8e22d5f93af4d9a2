//! Shared-token authentication for the `/api` tree.

use axum::extract::{FromRequestParts, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use pocket_ledger_core::auth_token::tokens_match;
use pocket_ledger_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the configured Bearer token.
///
/// Can be used directly as a handler extractor, but the router applies it
/// to every `/api` route through [`require_auth_token`].
#[derive(Debug, Clone, Copy)]
pub struct AuthToken;

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if !tokens_match(token, &state.config.auth_token) {
            tracing::warn!(path = %parts.uri.path(), "Rejected request with invalid token");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid token".into(),
            )));
        }

        Ok(AuthToken)
    }
}

/// Middleware rejecting any request without a valid token before it
/// reaches a handler.
pub async fn require_auth_token(_auth: AuthToken, request: Request, next: Next) -> Response {
    next.run(request).await
}
