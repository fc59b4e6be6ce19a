//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, endpoints,
    transaction::{Category, Transaction, TransactionType, core::create_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// Whether the transaction is an expense or income.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The spending category for the transaction.
    pub category: Category,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The date when the transaction occurred.
    pub date: Date,
}

/// A route handler for creating a new transaction, redirects back to the
/// tracker page on success so the whole page re-renders with the new row.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> impl IntoResponse {
    let builder = Transaction::build(form.amount, form.transaction_type, form.category, form.date)
        .description(&form.description);

    let connection = state.db_connection.lock().unwrap();

    if let Err(error) = create_transaction(builder, &connection) {
        return error.into_response();
    }

    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
