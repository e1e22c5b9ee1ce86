//! Session-related types.
//!
//! The finder keeps one value in the session: where the visitor is in the
//! quiz flow and, once they have submitted the quiz, their answers.

use serde::{Deserialize, Serialize};

use petal_core::Answers;

/// Which part of the finder flow the visitor is on.
///
/// The browser drives navigation with plain links and form posts; the
/// screen value exists so results-only views (the contact form in
/// particular) survive a refresh and so direct navigation to the results
/// page can be redirected back to the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Landing page, quiz not started.
    #[default]
    Landing,
    /// Quiz form in progress.
    Quiz,
    /// Results page after a valid submission.
    Results,
    /// Results page with the consultation form expanded.
    ContactOpen,
}

/// Session-stored quiz state.
///
/// `answers` is `None` until the visitor submits a valid quiz; every
/// submission overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuizSession {
    /// Current screen in the flow.
    pub screen: Screen,
    /// The last valid quiz submission, if any.
    pub answers: Option<Answers>,
}

/// Session keys for finder data.
pub mod keys {
    /// Key for storing the quiz flow state.
    pub const QUIZ: &str = "quiz";
}
