//! Request gatekeeping.
//!
//! - [`auth::AuthToken`] -- Extracts and checks the shared Bearer token.
//! - [`auth::require_auth_token`] -- Layer applying that check to a whole router.

pub mod auth;
