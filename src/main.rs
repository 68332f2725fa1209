//! The command line front end for the pocketbook ledger.
//!
//! Each invocation is one user action: load the ledger from the store,
//! apply the operation, save the full sequence back, print the result.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use time::{Date, OffsetDateTime, macros::format_description};
use tracing_subscriber::{
    Layer, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use pocketbook::{
    Error, KindFilter, Ledger, LedgerStore, SqliteBlobStore, Transaction, TransactionDraft,
    TransactionKind, categories_for, currency, short_date, signed_currency,
};

/// A personal income and expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// File path to the ledger SQLite database.
    #[arg(long, default_value = "ledger.db")]
    db_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new transaction.
    Add {
        /// What the transaction was for.
        #[arg(long)]
        description: String,

        /// The amount of money, e.g. 4.50.
        #[arg(long)]
        amount: String,

        /// Whether money was earned or spent.
        #[arg(long, value_enum)]
        kind: KindArg,

        /// The category to file the entry under (see `categories`).
        #[arg(long)]
        category: String,

        /// The date of the transaction as YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a transaction by its ID.
    Remove {
        /// The ID shown in the `list` output.
        id: i64,
    },

    /// List transactions, newest first.
    List {
        /// Show only income or only expenses.
        #[arg(long, value_enum, default_value = "all")]
        filter: FilterArg,
    },

    /// Show the balance and the income/expense totals.
    Summary,

    /// Show the categories available for a transaction kind.
    Categories {
        /// Whether to list income or expense categories.
        #[arg(value_enum)]
        kind: KindArg,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FilterArg {
    All,
    Income,
    Expense,
}

impl From<FilterArg> for KindFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => KindFilter::All,
            FilterArg::Income => KindFilter::Income,
            FilterArg::Expense => KindFilter::Expense,
        }
    }
}

fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut store = SqliteBlobStore::open(&cli.db_path)?;
    let mut ledger = Ledger::hydrate(store.load()?);

    match cli.command {
        Command::Add {
            description,
            amount,
            kind,
            category,
            date,
        } => {
            let date = match date {
                Some(text) => parse_date(&text)?,
                None => today(),
            };

            let draft = TransactionDraft {
                description,
                amount,
                kind: kind.into(),
                category,
                date,
            };

            let transaction = ledger.add(&draft)?;
            let line = render_transaction(transaction);
            store.save(ledger.transactions())?;

            println!("Added:");
            println!("{line}");
        }
        Command::Remove { id } => {
            if ledger.remove(id) {
                store.save(ledger.transactions())?;
                println!("Removed transaction {id}.");
            } else {
                // Idempotent delete: already gone is not an error.
                println!("No transaction with ID {id}.");
            }
        }
        Command::List { filter } => {
            let transactions = ledger.filtered(filter.into());

            if transactions.is_empty() {
                println!("No transactions yet.");
            } else {
                for transaction in transactions {
                    println!("{}", render_transaction(transaction));
                }
            }
        }
        Command::Summary => {
            let summary = ledger.summary();

            println!("Balance:  {}", currency(summary.balance));
            println!(
                "Income:   {} ({})",
                currency(summary.total_income),
                count_label(summary.income_count)
            );
            println!(
                "Expenses: {} ({})",
                currency(summary.total_expense),
                count_label(summary.expense_count)
            );
        }
        Command::Categories { kind } => {
            for category in categories_for(kind.into()) {
                println!("{category}");
            }
        }
    }

    Ok(())
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty().with_filter(env_filter))
        .init();
}

/// Parse a YYYY-MM-DD date from the command line.
fn parse_date(text: &str) -> Result<Date, Error> {
    let format = format_description!("[year]-[month]-[day]");

    Date::parse(text, &format).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Today's date in the local timezone, falling back to UTC when the local
/// offset cannot be determined.
fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

fn render_transaction(transaction: &Transaction) -> String {
    format!(
        "{:>5}  {:>12}  {:<13}  {:<13}  {}",
        transaction.id,
        signed_currency(transaction.kind, transaction.amount),
        transaction.category,
        short_date(transaction.date),
        transaction.description
    )
}

fn count_label(count: usize) -> String {
    match count {
        1 => "1 transaction".to_owned(),
        n => format!("{n} transactions"),
    }
}
