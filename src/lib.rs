//! Pocketbook is a small personal finance tracker: it records income and
//! expense entries, keeps them in a local SQLite database, and derives
//! running totals and filtered, display-formatted listings.
//!
//! The heart of the library is the [Ledger], an in-memory sequence of
//! [Transaction] records. Persistence is an external collaborator behind
//! the [LedgerStore] trait: the caller loads the ledger once at startup
//! and saves the full sequence after every mutation.

#![warn(missing_docs)]

mod category;
mod format;
mod ledger;
mod sqlite_store;
mod store;
mod transaction;

pub use category::{EXPENSE_CATEGORIES, INCOME_CATEGORIES, categories_for};
pub use format::{currency, short_date, signed_currency};
pub use ledger::{KindFilter, Ledger, LedgerSummary};
pub use sqlite_store::SqliteBlobStore;
pub use store::{LedgerStore, MemoryStore};
pub use transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty description was used to create a transaction.
    #[error("the transaction description cannot be empty")]
    EmptyDescription,

    /// An empty category was used to create a transaction.
    #[error("the transaction category cannot be empty")]
    EmptyCategory,

    /// An empty amount was used to create a transaction.
    #[error("the transaction amount cannot be empty")]
    EmptyAmount,

    /// The entered amount could not be parsed as a finite number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The entered amount was zero or negative.
    ///
    /// Amounts are stored as positive magnitudes; whether money came in or
    /// went out is carried by the transaction kind instead of the sign.
    #[error("the transaction amount must be greater than zero")]
    NonPositiveAmount,

    /// The entered date could not be parsed as a calendar date.
    #[error("\"{0}\" is not a valid date, expected the format YYYY-MM-DD")]
    InvalidDate(String),

    /// The stored ledger blob could not be serialized or deserialized.
    #[error("could not read or write the ledger as JSON: {0}")]
    JsonSerialization(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}
