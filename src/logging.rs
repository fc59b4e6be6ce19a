//! Middleware for logging requests and responses.

use axum::{extract::Request, middleware::Next, response::Response};

/// The maximum number of body bytes logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body_text) = extract_parts_and_body_text_from_request(request).await;
    log_request(&parts, &body_text);

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body_text) = extract_parts_and_body_text_from_response(response).await;
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn extract_parts_and_body_text_from_request(
    request: Request,
) -> (axum::http::request::Parts, String) {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    (parts, String::from_utf8_lossy(&body_bytes).to_string())
}

async fn extract_parts_and_body_text_from_response(
    response: Response,
) -> (axum::http::response::Parts, String) {
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    (parts, String::from_utf8_lossy(&body_bytes).to_string())
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {parts:#?}\nbody: {:}...",
            &body[..LOG_BODY_LENGTH_LIMIT]
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {parts:#?}\nbody: {body:?}");
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {parts:#?}\nbody: {:}...",
            &body[..LOG_BODY_LENGTH_LIMIT]
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {parts:#?}\nbody: {body:?}");
    }
}
