//! Outlay is a web app for tracking everyday expenses and income.
//!
//! This library provides an HTTP server that directly serves HTML pages:
//! a single page with a transaction form, summary totals, a category
//! breakdown chart, the full transaction table and a CSV export.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod dashboard;
mod db;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    Category, Transaction, TransactionBuilder, TransactionType, count_transactions,
    create_transaction,
};

use crate::{
    internal_server_error::InternalServerError, not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// An error occurred while serializing transactions as CSV.
    ///
    /// Callers should pass in the original error as a string.
    #[error("could not serialize transactions as CSV: {0}")]
    CsvError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
