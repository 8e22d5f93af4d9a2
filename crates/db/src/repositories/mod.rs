//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument. No results are cached:
//! every read goes to the store and every write is applied immediately.

pub mod category_repo;
pub mod expense_repo;
pub mod stats_repo;

pub use category_repo::CategoryRepo;
pub use expense_repo::ExpenseRepo;
pub use stats_repo::StatsRepo;
