//! Defines the ledger persistence trait and an in-memory implementation.
//!
//! Persistence is deliberately dumb: the whole transaction sequence is
//! written on every save and read back in one piece at startup. There is
//! no incremental diffing and no migration of old formats.

use crate::{Error, transaction::Transaction};

/// Handles loading and saving the full transaction sequence.
///
/// A failed save must leave the caller's in-memory ledger untouched; the
/// ledger remains the source of truth for the rest of the process.
pub trait LedgerStore {
    /// Load every stored transaction, in the order it was saved.
    ///
    /// A store that has never been written to returns an empty sequence,
    /// not an error.
    fn load(&self) -> Result<Vec<Transaction>, Error>;

    /// Replace the stored sequence with `transactions`.
    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error>;
}

/// A [LedgerStore] that keeps the saved sequence in memory.
///
/// Used in tests and anywhere the ledger should run without touching disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.transactions.clone())
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        self.transactions = transactions.to_vec();

        Ok(())
    }
}

#[cfg(test)]
mod memory_store_tests {
    use time::macros::date;

    use crate::transaction::{Transaction, TransactionKind};

    use super::{LedgerStore, MemoryStore};

    fn transaction(id: i64) -> Transaction {
        Transaction {
            id,
            description: format!("Entry {id}"),
            amount: 10.0,
            kind: TransactionKind::Expense,
            category: "Food".to_owned(),
            date: date!(2024 - 01 - 01),
            created_at: 1704067200000 + id,
        }
    }

    #[test]
    fn unwritten_store_loads_empty() {
        let store = MemoryStore::new();

        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let transactions = vec![transaction(2), transaction(1)];

        store.save(&transactions).unwrap();

        assert_eq!(store.load().unwrap(), transactions);
    }

    #[test]
    fn save_replaces_the_previous_sequence() {
        let mut store = MemoryStore::new();
        store
            .save(&[transaction(1), transaction(2), transaction(3)])
            .unwrap();

        store.save(&[transaction(2)]).unwrap();

        assert_eq!(store.load().unwrap(), vec![transaction(2)]);
    }
}
