//! The route handler that renders the single page.
//!
//! This module contains:
//! - The route handler that runs the fetch-aggregate-render cycle
//! - The HTML view that assembles the form, summary, chart, table and
//!   export control

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error,
    dashboard::{
        aggregation::{Summary, by_category, summarize},
        charts::{DashboardChart, category_chart, chart_view, charts_script},
        summary::summary_view,
        tables::transactions_table,
    },
    endpoints,
    html::{BUTTON_EXPORT_STYLE, CARD_STYLE, HeadElement, base},
    timezone::get_local_offset,
    transaction::{Transaction, get_all_transactions, transaction_form},
};

/// The state needed for displaying the page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the page with the transaction form, summary, category chart,
/// transaction table and export control.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;
    drop(connection);

    let local_timezone = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;
    let today = OffsetDateTime::now_utc().to_offset(local_timezone).date();

    let summary = summarize(&transactions);
    let chart = DashboardChart {
        id: "category-chart",
        options: category_chart(&by_category(&transactions)).to_string(),
    };

    Ok(dashboard_view(today, &summary, &chart, &transactions).into_response())
}

/// Renders the whole page.
///
/// The layout follows the tracker's single-page design: the form on the
/// left, the summary and category chart on the right, the transaction table
/// spanning the full width below, and the export control at the bottom.
fn dashboard_view(
    default_date: Date,
    summary: &Summary,
    chart: &DashboardChart,
    transactions: &[Transaction],
) -> Markup {
    let content = html!(
        h1 class="text-5xl font-bold text-center py-6 text-white bg-gray-900 shadow-md"
        {
            "Expense Tracker"
        }

        div class="flex space-x-6 p-6"
        {
            // Left column: the submission form.
            div class={(CARD_STYLE) " flex-grow"}
            {
                (transaction_form(default_date))
            }

            // Right column: summary and category chart.
            div class={(CARD_STYLE) " flex-grow"}
            {
                h2 class="text-3xl font-bold text-white mb-4" { "Summary" }
                (summary_view(summary))

                h2 class="text-3xl font-bold text-white mb-4" { "Category Breakdown" }
                (chart_view(chart))
            }
        }

        div class="max-w-7xl mx-auto mb-6 px-6"
        {
            h2 class="text-3xl font-bold text-white mb-4" { "Transaction List" }
            (transactions_table(transactions))
        }

        div class="text-center"
        {
            a href=(endpoints::EXPORT_API) class=(BUTTON_EXPORT_STYLE) { "Export to CSV" }
        }
    );

    let scripts = [
        HeadElement::ScriptLink(
            "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js".to_owned(),
        ),
        charts_script(std::slice::from_ref(chart)),
    ];

    base("Expense Tracker", &scripts, &content)
}
