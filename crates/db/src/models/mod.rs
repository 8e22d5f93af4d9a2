//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A typed create input for inserts
//! - A patch struct (all `Option` fields) for partial updates

pub mod category;
pub mod expense;
pub mod stats;
