//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for storing and querying transactions
//! - The endpoint for creating a transaction and the CSV export endpoint
//! - The submission form rendered on the single page

mod core;
mod create_transaction_endpoint;
mod export_endpoint;
mod form;

pub use core::{
    Category, DatabaseId, Transaction, TransactionBuilder, TransactionType, count_transactions,
    create_transaction, create_transaction_table, get_all_transactions, map_transaction_row,
};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use export_endpoint::export_transactions_endpoint;
pub use form::transaction_form;
