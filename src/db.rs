/*! This module defines the function for initializing the application's database. */

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, transaction::create_transaction_table};

/// Create the application tables in the database.
///
/// This function is idempotent: tables that already exist are left as-is.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
