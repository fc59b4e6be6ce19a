//! The single page view.
//!
//! Provides the page handler plus the aggregation, chart, summary and table
//! components it assembles.

mod aggregation;
mod charts;
mod handlers;
mod summary;
mod tables;

pub use handlers::get_dashboard_page;
