//! The fixed category sets offered for each transaction kind.
//!
//! The sets are part of the application contract: the presentation layer
//! offers exactly these choices, and switching the transaction kind resets
//! any previously chosen category because the valid set changes. The core
//! itself only checks that a category is present, not that it belongs to
//! the set.

use crate::transaction::TransactionKind;

/// The categories an expense can be filed under.
pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Other",
];

/// The categories an income entry can be filed under.
pub const INCOME_CATEGORIES: [&str; 5] = ["Salary", "Freelance", "Investment", "Gift", "Other"];

/// The category choices valid for the given transaction kind.
pub fn categories_for(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => &INCOME_CATEGORIES,
        TransactionKind::Expense => &EXPENSE_CATEGORIES,
    }
}
