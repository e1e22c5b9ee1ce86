//! HTTP route handlers for the finder.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Landing page
//! GET  /health             - Health check (wired in main)
//! POST /home               - Reset the flow, return to the landing page
//!
//! # Quiz
//! GET  /quiz               - Quiz form (repopulated on revisit)
//! POST /quiz               - Submit answers, redirect to results
//! GET  /quiz/results       - Recommendations and the full catalog
//!
//! # Consultation (requires quiz answers, rate limited)
//! POST /consultation/open  - Expand the contact form on the results page
//! POST /consultation       - Submit a consultation request
//! ```

pub mod consultation;
pub mod home;
pub mod quiz;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::contact_rate_limiter;
use crate::state::AppState;

/// Create the quiz routes router.
pub fn quiz_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(quiz::form_page).post(quiz::submit))
        .route("/results", get(quiz::results))
}

/// Create the consultation routes router.
///
/// Both endpoints sit behind the contact rate limiter.
pub fn consultation_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(consultation::submit))
        .route("/open", post(consultation::open))
        .layer(contact_rate_limiter())
}

/// Create all routes for the finder.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::home))
        // Return-to-home reset
        .route("/home", post(home::reset))
        // Quiz routes
        .nest("/quiz", quiz_routes())
        // Consultation routes
        .nest("/consultation", consultation_routes())
}
