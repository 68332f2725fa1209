//! The ledger: the ordered collection of all transactions and the
//! operations over it.
//!
//! The ledger is a plain in-memory value owned by the caller. It never
//! touches storage itself; after a mutation the caller hands the current
//! sequence to a [LedgerStore](crate::LedgerStore) to persist it. This
//! keeps the core logic testable without a storage dependency.

use time::OffsetDateTime;

use crate::{
    Error,
    transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind},
};

/// The ordered collection of all recorded transactions, newest insertion
/// first.
///
/// Invariant: no two transactions share an ID. IDs come from a monotonic
/// counter seeded from the hydrated data, so they stay unique across
/// process restarts.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

/// The totals derived from a full pass over the ledger.
///
/// Recomputed on every read. The collection is small, so a linear scan per
/// read is simpler than keeping cached totals in sync with mutations.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LedgerSummary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts, as a positive magnitude.
    pub total_expense: f64,
    /// `total_income - total_expense`. Negative when spending exceeds
    /// earnings.
    pub balance: f64,
    /// How many income entries the ledger holds.
    pub income_count: usize,
    /// How many expense entries the ledger holds.
    pub expense_count: usize,
}

/// Selects which transactions a ledger view includes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    /// Include every transaction.
    #[default]
    All,
    /// Include only income transactions.
    Income,
    /// Include only expense transactions.
    Expense,
}

impl KindFilter {
    fn matches(self, kind: TransactionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == TransactionKind::Income,
            KindFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a ledger from previously stored transactions.
    ///
    /// `transactions` must be in the stored order (newest insertion first);
    /// the ledger preserves it as-is. The ID counter resumes past the
    /// largest stored ID.
    pub fn hydrate(transactions: Vec<Transaction>) -> Self {
        let next_id = transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            transactions,
            next_id,
        }
    }

    /// Validate `draft` and insert it at the front of the ledger.
    ///
    /// The new entry gets a fresh ID and the current instant as its
    /// insertion timestamp. Front insertion means the most recently added
    /// entry is always listed first, and entries sharing a date are ordered
    /// by recency of insertion rather than by date value.
    ///
    /// Returns a reference to the inserted transaction. On error the
    /// ledger is left unchanged.
    ///
    /// # Errors
    /// Returns the validation errors documented on
    /// [TransactionDraft::validate].
    pub fn add(&mut self, draft: &TransactionDraft) -> Result<&Transaction, Error> {
        let amount = draft.validate()?;

        let transaction = Transaction {
            id: self.next_id,
            description: draft.description.trim().to_owned(),
            amount,
            kind: draft.kind,
            category: draft.category.trim().to_owned(),
            date: draft.date,
            created_at: now_unix_millis(),
        };

        tracing::info!(
            "adding transaction {} ({:?} {} in {})",
            transaction.id,
            transaction.kind,
            transaction.amount,
            transaction.category
        );

        self.next_id += 1;
        self.transactions.insert(0, transaction);

        Ok(&self.transactions[0])
    }

    /// Remove the transaction with the given `id`, if present.
    ///
    /// Removing an absent ID is a silent no-op rather than an error, so
    /// removal is idempotent. Returns whether an entry was removed.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        let Some(position) = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
        else {
            tracing::debug!("remove({id}) matched no transaction");
            return false;
        };

        let removed = self.transactions.remove(position);
        tracing::info!("removed transaction {} ({})", removed.id, removed.description);

        true
    }

    /// Compute the income/expense totals and the balance in a single pass.
    pub fn summary(&self) -> LedgerSummary {
        let mut summary = LedgerSummary::default();

        for transaction in &self.transactions {
            match transaction.kind {
                TransactionKind::Income => {
                    summary.total_income += transaction.amount;
                    summary.income_count += 1;
                }
                TransactionKind::Expense => {
                    summary.total_expense += transaction.amount;
                    summary.expense_count += 1;
                }
            }
        }

        summary.balance = summary.total_income - summary.total_expense;

        summary
    }

    /// The transactions matching `filter`, in ledger order.
    pub fn filtered(&self, filter: KindFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| filter.matches(transaction.kind))
            .collect()
    }

    /// Every transaction, newest insertion first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// How many transactions the ledger holds.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

fn now_unix_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
