//! Defines the core data model and database queries for transactions.

use std::fmt;

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// Whether a transaction took money out or brought money in.
///
/// The type field, not the sign of the amount, decides which summary total a
/// transaction counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money spent.
    Expense,
    /// Money earned.
    Income,
}

impl TransactionType {
    /// The name stored in the database and displayed in the UI.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Expense => "Expense",
            TransactionType::Income => "Income",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "Expense" => Ok(TransactionType::Expense),
            "Income" => Ok(TransactionType::Income),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

/// The spending category assigned to a transaction.
///
/// The set is closed in the UI. The database stores the name as plain text
/// and does not enforce the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, restaurants and takeaways.
    Food,
    /// Public transport, fuel and parking.
    Transportation,
    /// Movies, games and nights out.
    Entertainment,
    /// Power, water, internet and phone bills.
    Utilities,
}

impl Category {
    /// All categories in the order they are displayed.
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Utilities,
    ];

    /// The name stored in the database and displayed in the UI.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "Food" => Ok(Category::Food),
            "Transportation" => Ok(Category::Transportation),
            "Entertainment" => Ok(Category::Entertainment),
            "Utilities" => Ok(Category::Utilities),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseId,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// Whether the transaction is an expense or income.
    pub transaction_type: TransactionType,
    /// The spending category the transaction belongs to.
    pub category: Category,
    /// A text description of what the transaction was for, may be empty.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        amount: f64,
        transaction_type: TransactionType,
        category: Category,
        date: Date,
    ) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            transaction_type,
            category,
            description: String::new(),
            date,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The description defaults to the empty string. Pass the builder to
/// [create_transaction] to store the transaction and receive the stored row
/// with its assigned ID.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// use crate::transaction::{Category, Transaction, TransactionType};
///
/// let builder = Transaction::build(
///         45.99,
///         TransactionType::Expense,
///         Category::Food,
///         date!(2025 - 01 - 15),
///     )
///     .description("Coffee shop purchase");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The monetary amount of the transaction.
    ///
    /// No sign convention is enforced. Whether the amount counts as spending
    /// or earnings is decided by `transaction_type`, not by the sign.
    pub amount: f64,

    /// Whether the transaction is an expense or income.
    pub transaction_type: TransactionType,

    /// The spending category for the transaction.
    pub category: Category,

    /// A human-readable description of the transaction, may be empty.
    pub description: String,

    /// The date when the transaction occurred.
    pub date: Date,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database from a builder.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (amount, type, category, description, date)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, amount, type, category, description, date",
        )?
        .query_row(
            (
                builder.amount,
                builder.transaction_type,
                builder.category,
                builder.description,
                builder.date,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve every transaction in the database, ordered by ID.
///
/// ID order matches insertion order, which keeps renders and exports
/// deterministic.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is some SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, amount, type, category, description, date FROM transactions ORDER BY id",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transactions table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                type TEXT NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transactions', 0)",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let transaction_type = row.get(2)?;
    let category = row.get(3)?;
    let description = row.get(4)?;
    let date = row.get(5)?;

    Ok(Transaction {
        id,
        amount,
        transaction_type,
        category,
        description,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        transaction::{
            Category, Transaction, TransactionType, count_transactions, create_transaction,
            get_all_transactions,
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn create_succeeds() {
        let conn = get_test_connection();
        let amount = 12.3;

        let result = create_transaction(
            Transaction::build(
                amount,
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 01 - 01),
            ),
            &conn,
        );

        match result {
            Ok(transaction) => {
                assert_eq!(transaction.id, 1);
                assert_eq!(transaction.amount, amount);
                assert_eq!(transaction.transaction_type, TransactionType::Expense);
                assert_eq!(transaction.category, Category::Food);
                assert_eq!(transaction.description, "");
                assert_eq!(transaction.date, date!(2024 - 01 - 01));
            }
            Err(error) => panic!("Unexpected error: {error}"),
        }
    }

    #[test]
    fn create_stores_description() {
        let conn = get_test_connection();

        let transaction = create_transaction(
            Transaction::build(
                50.0,
                TransactionType::Expense,
                Category::Food,
                date!(2024 - 01 - 01),
            )
            .description("lunch"),
            &conn,
        )
        .expect("Could not create transaction");

        assert_eq!(transaction.description, "lunch");
    }

    #[test]
    fn get_all_returns_empty_vec_on_empty_database() {
        let conn = get_test_connection();

        let transactions = get_all_transactions(&conn).expect("Could not get transactions");

        assert_eq!(transactions, vec![]);
    }

    #[test]
    fn get_all_returns_inserted_rows_in_id_order() {
        let conn = get_test_connection();
        let inserted = vec![
            create_transaction(
                Transaction::build(
                    50.0,
                    TransactionType::Expense,
                    Category::Food,
                    date!(2024 - 01 - 01),
                )
                .description("lunch"),
                &conn,
            )
            .unwrap(),
            create_transaction(
                Transaction::build(
                    200.0,
                    TransactionType::Income,
                    Category::Food,
                    date!(2024 - 01 - 02),
                ),
                &conn,
            )
            .unwrap(),
            create_transaction(
                Transaction::build(
                    15.5,
                    TransactionType::Expense,
                    Category::Transportation,
                    date!(2024 - 01 - 03),
                )
                .description("bus fare"),
                &conn,
            )
            .unwrap(),
        ];

        let transactions = get_all_transactions(&conn).expect("Could not get transactions");

        assert_eq!(transactions, inserted);
        assert!(
            transactions.windows(2).all(|pair| pair[0].id < pair[1].id),
            "transactions should be ordered by ID: {transactions:?}"
        );
    }

    #[test]
    fn amount_sign_is_not_constrained() {
        let conn = get_test_connection();

        let transaction = create_transaction(
            Transaction::build(
                -42.0,
                TransactionType::Income,
                Category::Utilities,
                date!(2024 - 02 - 29),
            ),
            &conn,
        )
        .expect("Could not create transaction");

        assert_eq!(transaction.amount, -42.0);
        assert_eq!(transaction.transaction_type, TransactionType::Income);
    }

    #[test]
    fn get_count() {
        let conn = get_test_connection();
        let today = date!(2025 - 10 - 04);
        let want_count = 20;
        for i in 1..=want_count {
            create_transaction(
                Transaction::build(i as f64, TransactionType::Expense, Category::Food, today),
                &conn,
            )
            .expect("Could not create transaction");
        }

        let got_count = count_transactions(&conn).expect("Could not get count");

        assert_eq!(want_count, got_count);
    }
}

#[cfg(test)]
mod model_tests {
    use crate::transaction::{Category, TransactionType};

    #[test]
    fn category_names_round_trip_through_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn transaction_type_names() {
        assert_eq!(TransactionType::Expense.as_str(), "Expense");
        assert_eq!(TransactionType::Income.as_str(), "Income");
    }
}
