//! The transaction model and the validation applied to new entries.
//!
//! A [Transaction] is immutable once created: there is no update operation
//! anywhere in the application, entries are only ever added and removed.
//! New entries start life as a [TransactionDraft] holding the raw user
//! input, which is validated when it is handed to
//! [Ledger::add](crate::Ledger::add).

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// Uniquely identifies a [Transaction] within the ledger.
///
/// Used only for lookup and removal. IDs are assigned by the ledger from a
/// monotonic counter, so two entries added in the same instant still get
/// distinct IDs.
pub type TransactionId = i64;

/// Whether a transaction records money earned or money spent.
///
/// The sign of an entry is carried here, not by a negative amount:
/// [Transaction::amount] is always a positive magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. a coffee.
    Expense,
}

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// The serialized field names (`type` for `kind`, `timestamp` for
/// `created_at`) are the storage contract and must not change, otherwise
/// existing ledgers fail to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned, always a positive magnitude.
    pub amount: f64,
    /// Whether this entry is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The category the entry was filed under, e.g. "Food" or "Salary".
    pub category: String,
    /// The calendar date the transaction happened on (no time of day).
    pub date: Date,
    /// When the entry was inserted, as unix milliseconds.
    ///
    /// Only used to order entries by recency of insertion when dates tie,
    /// never displayed.
    #[serde(rename = "timestamp")]
    pub created_at: i64,
}

/// The raw user input for a new transaction, before validation.
///
/// `amount` is kept as the entered string so that validation can
/// distinguish an empty field from an unparseable one and report the
/// offending text back to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount as entered, e.g. "4.50".
    pub amount: String,
    /// Whether the new entry is income or an expense.
    pub kind: TransactionKind,
    /// The chosen category.
    pub category: String,
    /// The calendar date the transaction happened on.
    pub date: Date,
}

impl TransactionDraft {
    /// Check the presence rules and parse the entered amount.
    ///
    /// Returns the amount as a number on success. The draft itself is left
    /// untouched either way, so a rejected form keeps its entered values
    /// for correction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyDescription] if the description is empty or blank,
    /// - [Error::EmptyCategory] if the category is empty or blank,
    /// - [Error::EmptyAmount] if the amount field is empty or blank,
    /// - [Error::InvalidAmount] if the amount does not parse as a finite
    ///   number,
    /// - or [Error::NonPositiveAmount] if the amount is zero or negative.
    pub fn validate(&self) -> Result<f64, Error> {
        if self.description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        if self.category.trim().is_empty() {
            return Err(Error::EmptyCategory);
        }

        let amount_text = self.amount.trim();

        if amount_text.is_empty() {
            return Err(Error::EmptyAmount);
        }

        let amount: f64 = amount_text
            .parse()
            .map_err(|_| Error::InvalidAmount(amount_text.to_owned()))?;

        if !amount.is_finite() {
            return Err(Error::InvalidAmount(amount_text.to_owned()));
        }

        if amount <= 0.0 {
            return Err(Error::NonPositiveAmount);
        }

        Ok(amount)
    }
}

#[cfg(test)]
mod draft_validation_tests {
    use time::macros::date;

    use crate::Error;

    use super::{TransactionDraft, TransactionKind};

    fn valid_draft() -> TransactionDraft {
        TransactionDraft {
            description: "Coffee".to_owned(),
            amount: "4.50".to_owned(),
            kind: TransactionKind::Expense,
            category: "Food".to_owned(),
            date: date!(2024 - 01 - 01),
        }
    }

    #[test]
    fn validate_accepts_valid_draft() {
        assert_eq!(valid_draft().validate(), Ok(4.5));
    }

    #[test]
    fn validate_rejects_empty_description() {
        let draft = TransactionDraft {
            description: "".to_owned(),
            ..valid_draft()
        };

        assert_eq!(draft.validate(), Err(Error::EmptyDescription));
    }

    #[test]
    fn validate_rejects_blank_description() {
        let draft = TransactionDraft {
            description: "   ".to_owned(),
            ..valid_draft()
        };

        assert_eq!(draft.validate(), Err(Error::EmptyDescription));
    }

    #[test]
    fn validate_rejects_empty_category() {
        let draft = TransactionDraft {
            category: "".to_owned(),
            ..valid_draft()
        };

        assert_eq!(draft.validate(), Err(Error::EmptyCategory));
    }

    #[test]
    fn validate_rejects_empty_amount() {
        let draft = TransactionDraft {
            amount: "".to_owned(),
            ..valid_draft()
        };

        assert_eq!(draft.validate(), Err(Error::EmptyAmount));
    }

    #[test]
    fn validate_rejects_unparseable_amount() {
        let draft = TransactionDraft {
            amount: "four fifty".to_owned(),
            ..valid_draft()
        };

        assert_eq!(
            draft.validate(),
            Err(Error::InvalidAmount("four fifty".to_owned()))
        );
    }

    #[test]
    fn validate_rejects_non_finite_amount() {
        for text in ["inf", "-inf", "NaN"] {
            let draft = TransactionDraft {
                amount: text.to_owned(),
                ..valid_draft()
            };

            assert_eq!(
                draft.validate(),
                Err(Error::InvalidAmount(text.to_owned())),
                "expected {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_zero_amount() {
        let draft = TransactionDraft {
            amount: "0".to_owned(),
            ..valid_draft()
        };

        assert_eq!(draft.validate(), Err(Error::NonPositiveAmount));
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let draft = TransactionDraft {
            amount: "-4.50".to_owned(),
            ..valid_draft()
        };

        assert_eq!(draft.validate(), Err(Error::NonPositiveAmount));
    }

    #[test]
    fn validate_trims_surrounding_whitespace_in_amount() {
        let draft = TransactionDraft {
            amount: " 4.50 ".to_owned(),
            ..valid_draft()
        };

        assert_eq!(draft.validate(), Ok(4.5));
    }
}

#[cfg(test)]
mod serialization_tests {
    use serde_json::json;
    use time::macros::date;

    use super::{Transaction, TransactionKind};

    #[test]
    fn transaction_uses_storage_field_names() {
        let transaction = Transaction {
            id: 3,
            description: "Coffee".to_owned(),
            amount: 4.5,
            kind: TransactionKind::Expense,
            category: "Food".to_owned(),
            date: date!(2024 - 01 - 01),
            created_at: 1704067200000,
        };

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 3,
                "description": "Coffee",
                "amount": 4.5,
                "type": "expense",
                "category": "Food",
                "date": "2024-01-01",
                "timestamp": 1704067200000i64,
            })
        );
    }

    #[test]
    fn transaction_round_trips_through_json() {
        let transaction = Transaction {
            id: 7,
            description: "Salary - January".to_owned(),
            amount: 2500.0,
            kind: TransactionKind::Income,
            category: "Salary".to_owned(),
            date: date!(2024 - 01 - 31),
            created_at: 1706659200000,
        };

        let text = serde_json::to_string(&transaction).unwrap();
        let parsed: Transaction = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, transaction);
    }
}
