//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
    transaction::{create_transaction_endpoint, export_transactions_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::EXPORT_API, get(export_transactions_endpoint))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{AppState, endpoints, routing::build_router};

    fn get_test_server() -> TestServer {
        let conn = Connection::open_in_memory().unwrap();
        let state = AppState::new(conn, "Etc/UTC").unwrap();

        TestServer::new(build_router(state))
    }

    async fn submit_transaction(
        server: &TestServer,
        amount: &str,
        transaction_type: &str,
        category: &str,
        description: &str,
        date: &str,
    ) {
        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[
                ("amount", amount),
                ("type", transaction_type),
                ("category", category),
                ("description", description),
                ("date", date),
            ])
            .await
            .assert_status_see_other();
    }

    #[tokio::test]
    async fn root_serves_the_tracker_page() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        assert!(response.text().contains("Expense Tracker"));
    }

    #[tokio::test]
    async fn submitted_transactions_appear_on_the_page() {
        let server = get_test_server();

        submit_transaction(&server, "50", "Expense", "Food", "lunch", "2024-01-01").await;
        submit_transaction(&server, "200", "Income", "Food", "", "2024-01-02").await;

        let response = server.get(endpoints::ROOT).await;
        let text = response.text();

        assert!(text.contains("lunch"), "got: {text}");
        assert!(text.contains("Total Expenses: $50.00"), "got: {text}");
        assert!(text.contains("Total Income: $200.00"), "got: {text}");
        assert!(text.contains("Net Balance: $150.00"), "got: {text}");
    }

    #[tokio::test]
    async fn export_after_two_submits_has_three_lines() {
        let server = get_test_server();

        submit_transaction(&server, "50", "Expense", "Food", "lunch", "2024-01-01").await;
        submit_transaction(&server, "200", "Income", "Food", "", "2024-01-02").await;

        let response = server.get(endpoints::EXPORT_API).await;

        response.assert_status_ok();
        let text = response.text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3, "want header + 2 rows, got: {text}");
        assert_eq!(lines[0], "id,amount,type,category,description,date");
    }

    #[tokio::test]
    async fn export_with_no_submits_is_header_only() {
        let server = get_test_server();

        let response = server.get(endpoints::EXPORT_API).await;

        response.assert_status_ok();
        assert_eq!(
            response.text().lines().count(),
            1,
            "want only the header row"
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let server = get_test_server();

        let response = server.get("/does/not/exist").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
