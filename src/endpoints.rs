//! The application's route URIs.

/// The single page showing the transaction form, summary, chart and table.
pub const ROOT: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to create a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to download all transactions as a CSV file.
pub const EXPORT_API: &str = "/api/export";
