//! Domain rules shared by the storage layer and the HTTP server.
//!
//! Nothing in here touches the database or the network: validation,
//! seed data, date-range resolution, and auth token helpers.

pub mod auth_token;
pub mod category;
pub mod error;
pub mod expense;
pub mod stats;
pub mod types;
