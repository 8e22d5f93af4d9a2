#![allow(dead_code)]

use chrono::NaiveDate;
use pocket_ledger_db::models::category::CreateCategory;
use pocket_ledger_db::models::expense::CreateExpense;
use pocket_ledger_db::DbPool;

/// A fresh, prepared in-memory store with the default categories seeded.
pub async fn test_pool() -> DbPool {
    pocket_ledger_db::open_and_prepare("sqlite::memory:")
        .await
        .expect("in-memory store should open")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        icon: "🍕".to_string(),
        color: "#123456".to_string(),
    }
}

pub fn new_expense(amount: f64, category_id: i64, date: &str) -> CreateExpense {
    CreateExpense {
        amount,
        category_id,
        date: day(date),
        note: String::new(),
    }
}
