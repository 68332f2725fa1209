//! Implements a SQLite backed ledger store.
//!
//! The store is a single-row key-value table: the whole transaction
//! sequence is serialized as one JSON array and written under a fixed key.
//! This mirrors how the data is shaped on the wire (see
//! [Transaction](crate::Transaction) for the field names) and keeps loads
//! and saves to one statement each.

use std::path::Path;

use rusqlite::Connection;

use crate::{
    Error,
    store::LedgerStore,
    transaction::Transaction,
};

/// The key the transaction blob is stored under.
const LEDGER_KEY: &str = "transactions";

/// Stores the ledger as a JSON blob in a SQLite database.
#[derive(Debug)]
pub struct SqliteBlobStore {
    connection: Connection,
}

impl SqliteBlobStore {
    /// Create a store backed by an existing SQLite `connection`.
    ///
    /// Creates the blob table if it does not exist yet.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the table cannot be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS blob_store (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            (),
        )?;

        Ok(Self { connection })
    }

    /// Open (or create) the SQLite database at `path` and prepare it as a
    /// ledger store.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the database cannot be opened or
    /// initialized.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let connection = Connection::open(path)?;

        Self::new(connection)
    }
}

impl LedgerStore for SqliteBlobStore {
    /// Load the stored transaction sequence.
    ///
    /// A database that has never been written to yields an empty sequence.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::JsonSerialization] if the stored blob is not a valid
    ///   transaction array,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn load(&self) -> Result<Vec<Transaction>, Error> {
        let query_result = self
            .connection
            .prepare("SELECT value FROM blob_store WHERE key = :key")?
            .query_row(&[(":key", LEDGER_KEY)], |row| row.get::<_, String>(0));

        let blob = match query_result {
            Ok(blob) => blob,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                tracing::debug!("no stored ledger found, starting empty");
                return Ok(Vec::new());
            }
            Err(error) => return Err(error.into()),
        };

        let transactions: Vec<Transaction> = serde_json::from_str(&blob)
            .map_err(|error| Error::JsonSerialization(error.to_string()))?;

        tracing::debug!("loaded {} transaction(s)", transactions.len());

        Ok(transactions)
    }

    /// Serialize `transactions` and rewrite the stored blob in full.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::JsonSerialization] if the sequence cannot be serialized,
    /// - or [Error::SqlError] if the write fails.
    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        let blob = serde_json::to_string(transactions)
            .map_err(|error| Error::JsonSerialization(error.to_string()))?;

        self.connection.execute(
            "INSERT INTO blob_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (LEDGER_KEY, &blob),
        )?;

        tracing::debug!("saved {} transaction(s)", transactions.len());

        Ok(())
    }
}
