//! Request correlation middleware.
//!
//! Every request gets an id that shows up in the request span, on the
//! Sentry scope, and in the `x-request-id` response header, so a support
//! ticket can be matched to a server-side trace without logging anything
//! else about the visitor.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// Header consulted on the way in and set on the way out.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream id we will echo back; anything else is replaced.
const MAX_REQUEST_ID_LEN: usize = 64;

/// Reuse a well-formed upstream id, otherwise mint a UUID v4.
///
/// The id ends up in log lines and response headers, so an upstream
/// value is only trusted when it is short plain ASCII.
fn accept_or_mint(request: &Request) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        })
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned)
}

/// Attach a request id to the span, the Sentry scope, and the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = accept_or_mint(&request);

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
