//! Defines the endpoint for downloading all transactions as a CSV file.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    transaction::{Transaction, core::get_all_transactions},
};

/// The file name suggested to the browser for the exported CSV.
const EXPORT_FILE_NAME: &str = "transactions.csv";

/// The CSV header row, matching the table column order.
const CSV_HEADER: [&str; 6] = ["id", "amount", "type", "category", "description", "date"];

/// The state needed to export transactions.
#[derive(Debug, Clone)]
pub struct ExportState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that serializes every transaction to CSV and serves the
/// result as a file download.
///
/// The route only runs when the user follows the export control, so the
/// initial page render can never produce a download. Exporting with no
/// transactions stored yields a header-only CSV.
pub async fn export_transactions_endpoint(
    State(state): State<ExportState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;
    drop(connection);

    let csv_bytes = write_transactions_csv(&transactions)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        csv_bytes,
    )
        .into_response())
}

/// Serialize `transactions` as CSV with a header row.
///
/// # Errors
/// Returns an [Error::CsvError] if a record cannot be written.
fn write_transactions_csv(transactions: &[Transaction]) -> Result<Vec<u8>, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for transaction in transactions {
        writer.write_record([
            transaction.id.to_string(),
            transaction.amount.to_string(),
            transaction.transaction_type.to_string(),
            transaction.category.to_string(),
            transaction.description.clone(),
            transaction.date.to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))
}
