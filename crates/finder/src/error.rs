//! Error type for route handlers, wired into Sentry.
//!
//! Handlers that touch the session return `Result<T, AppError>`; the
//! error is captured to Sentry and the client sees a bare 500. Quiz and
//! contact validation failures are rendered inline by their handlers and
//! never pass through here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the finder.
#[derive(Debug, Error)]
pub enum AppError {
    /// Session read or write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        // The client never sees error details
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Record a Sentry breadcrumb for a visitor action.
///
/// Breadcrumbs show up on error reports as the trail leading up to the
/// failure. Keep the data PII-free; answers and contact details stay out.
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_error() -> AppError {
        AppError::from(tower_sessions::session::Error::from(
            tower_sessions::session_store::Error::Backend("connection reset".to_string()),
        ))
    }

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            session_error().to_string(),
            "Session error: Backend error: connection reset"
        );
    }

    #[test]
    fn test_app_error_responds_with_500_and_no_details() {
        let response = session_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
