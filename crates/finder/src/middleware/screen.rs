//! Quiz flow extractors and session helpers.
//!
//! Provides an extractor for routes that only make sense after a valid
//! quiz submission (the results page and the consultation form).

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use petal_core::Answers;

use crate::models::{QuizSession, Screen, keys};

/// Extractor that requires completed quiz answers in the session.
///
/// If the visitor has not submitted the quiz, returns a redirect to the
/// quiz form.
///
/// # Example
///
/// ```rust,ignore
/// async fn results(quiz: RequireAnswers) -> impl IntoResponse {
///     let evaluation = evaluate(&quiz.answers);
///     // ...
/// }
/// ```
pub struct RequireAnswers {
    /// The validated answers from the last quiz submission.
    pub answers: Answers,
    /// The visitor's current screen in the flow.
    pub screen: Screen,
}

/// Rejection returned when quiz answers are required but absent.
pub struct AnswersRejection;

impl IntoResponse for AnswersRejection {
    fn into_response(self) -> Response {
        Redirect::to("/quiz").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAnswers
where
    S: Send + Sync,
{
    type Rejection = AnswersRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AnswersRejection)?;

        let quiz: QuizSession = session
            .get(keys::QUIZ)
            .await
            .ok()
            .flatten()
            .unwrap_or_default();

        let answers = quiz.answers.ok_or(AnswersRejection)?;

        Ok(Self {
            answers,
            screen: quiz.screen,
        })
    }
}

/// Load the quiz state from the session, defaulting to a fresh flow.
pub async fn load_quiz(session: &Session) -> QuizSession {
    session
        .get(keys::QUIZ)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the quiz state in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_quiz(
    session: &Session,
    quiz: &QuizSession,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::QUIZ, quiz).await
}

/// Drop the quiz state, returning the visitor to a fresh flow.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn reset_quiz(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<QuizSession>(keys::QUIZ).await?;
    Ok(())
}
