//! Category seed data and field validation.
//!
//! The default categories are inserted once, the first time the store is
//! prepared, and can never be deleted afterwards.

use crate::error::CoreError;

/// A built-in category inserted on first startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Built-in categories, in insertion order (ids 1..=6 on a fresh store).
pub const DEFAULT_CATEGORIES: &[DefaultCategory] = &[
    DefaultCategory {
        name: "餐饮",
        icon: "🍽️",
        color: "#FF5722",
    },
    DefaultCategory {
        name: "交通",
        icon: "🚗",
        color: "#2196F3",
    },
    DefaultCategory {
        name: "购物",
        icon: "🛍️",
        color: "#9C27B0",
    },
    DefaultCategory {
        name: "娱乐",
        icon: "🎮",
        color: "#4CAF50",
    },
    DefaultCategory {
        name: "居住",
        icon: "🏠",
        color: "#795548",
    },
    DefaultCategory {
        name: "其他",
        icon: "📝",
        color: "#607D8B",
    },
];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a required text field: it must contain something other than
/// whitespace. The value itself is stored as given.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
