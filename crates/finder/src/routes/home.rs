//! Landing page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::reset_quiz;
use crate::state::AppState;

/// The "How it works" steps shown on the landing page.
const HOW_IT_WORKS: [&str; 3] = [
    "Answer 4 short questions",
    "View personalized birth control recommendations that may be right for you",
    "Discuss your options with a Petal provider",
];

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub steps: &'static [&'static str],
    pub base_url: String,
}

/// Landing page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    HomeTemplate {
        steps: &HOW_IT_WORKS,
        base_url: state.config().base_url.clone(),
    }
}

/// Clear the stored quiz and return to the landing page.
#[instrument(skip_all)]
pub async fn reset(session: Session) -> Result<Redirect, AppError> {
    reset_quiz(&session).await?;
    Ok(Redirect::to("/"))
}
