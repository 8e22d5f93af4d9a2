//! Shared response body types for API handlers.
//!
//! Entities are returned as bare JSON objects; only acknowledgements that
//! carry no entity use a dedicated envelope.

use serde::Serialize;

/// `{ "success": true }` body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
