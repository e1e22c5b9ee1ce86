//! Consultation request route handlers.
//!
//! The contact form lives on the results page. Opening it is a session
//! write plus a redirect back to the results; submitting it re-renders
//! the results page directly so a failed validation keeps what the
//! visitor typed.

use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use petal_core::{ConsultationError, ConsultationRequest, evaluate};

use crate::error::{AppError, add_breadcrumb};
use crate::middleware::{RequireAnswers, load_quiz, save_quiz};
use crate::models::Screen;
use crate::routes::quiz::ResultsTemplate;

/// Raw contact form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsultationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub notes: String,
}

/// Expand the contact form on the results page.
#[instrument(skip_all)]
pub async fn open(_quiz: RequireAnswers, session: Session) -> Result<Redirect, AppError> {
    let mut quiz = load_quiz(&session).await;
    quiz.screen = Screen::ContactOpen;
    save_quiz(&session, &quiz).await?;
    Ok(Redirect::to("/quiz/results"))
}

/// Consultation form submission.
///
/// A valid request is logged for the intake team and acknowledged
/// inline. Note text is never logged; it can contain medical detail.
#[instrument(skip_all)]
pub async fn submit(quiz: RequireAnswers, Form(form): Form<ConsultationForm>) -> Response {
    let evaluation = evaluate(&quiz.answers);

    match ConsultationRequest::new(&form.name, &form.phone, &form.email, &form.notes) {
        Ok(request) => {
            tracing::info!(
                name = %request.name(),
                phone = %request.phone(),
                email = %request.email(),
                has_notes = request.notes().is_some(),
                "Consultation request received"
            );
            add_breadcrumb("consultation", "Consultation request submitted", None);

            let mut template = ResultsTemplate::new(evaluation, true);
            template.contact_submitted = true;
            template.into_response()
        }
        Err(error @ ConsultationError::MissingRequiredField) => {
            tracing::debug!("Consultation request missing required fields");
            let mut template = ResultsTemplate::new(evaluation, true);
            template.contact_form = form;
            template.contact_error = Some(error.to_string());
            template.into_response()
        }
    }
}
