//! Quiz route handlers.
//!
//! The quiz is a single form with four steps (priorities, lifestyle,
//! medical history, pregnancy plans). Submissions follow
//! POST-redirect-GET: valid answers land in the session and the visitor
//! is redirected to the results page, so a refresh never re-submits.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use petal_core::{
    Answers, AnswersError, CATALOG, Evaluation, Lifestyle, MedicalFlags, PregnancyPlans, Priority,
    Product, Recommendation, evaluate,
};

use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::middleware::{RequireAnswers, load_quiz, save_quiz};
use crate::models::{QuizSession, Screen};
use crate::routes::consultation::ConsultationForm;

/// Validation message shown when no priority is checked.
pub const PRIORITIES_REQUIRED_MESSAGE: &str = "Please select at least one priority in Step 1!";

/// Raw quiz form data.
///
/// Checkboxes submit `value="true"` when checked and nothing at all when
/// unchecked, hence the defaults. Radio groups always submit because the
/// form pre-selects one option per group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizForm {
    #[serde(default)]
    pub low_maintenance: bool,
    #[serde(default)]
    pub hormone_free: bool,
    #[serde(default)]
    pub regulating_periods: bool,
    #[serde(default)]
    pub improving_acne_mood: bool,
    #[serde(default)]
    pub short_term_flexibility: bool,
    #[serde(default)]
    pub cost: bool,
    #[serde(default)]
    pub lifestyle: Lifestyle,
    #[serde(default)]
    pub smoker_over_35: bool,
    #[serde(default)]
    pub migraine_aura: bool,
    #[serde(default)]
    pub vte_risk: bool,
    #[serde(default)]
    pub bmi_over_30: bool,
    #[serde(default)]
    pub plans: PregnancyPlans,
}

impl QuizForm {
    /// The priorities checked on the form, in display order.
    fn priorities(&self) -> Vec<Priority> {
        let mut priorities = Vec::new();
        if self.low_maintenance {
            priorities.push(Priority::LowMaintenance);
        }
        if self.hormone_free {
            priorities.push(Priority::HormoneFree);
        }
        if self.regulating_periods {
            priorities.push(Priority::RegulatingPeriods);
        }
        if self.improving_acne_mood {
            priorities.push(Priority::ImprovingAcneMood);
        }
        if self.short_term_flexibility {
            priorities.push(Priority::ShortTermFlexibility);
        }
        if self.cost {
            priorities.push(Priority::Cost);
        }
        priorities
    }

    /// Convert the raw form into validated answers.
    pub fn to_answers(&self) -> Result<Answers, AnswersError> {
        let medical = MedicalFlags {
            smoker_over_35: self.smoker_over_35,
            migraine_aura: self.migraine_aura,
            vte_risk: self.vte_risk,
            bmi_over_30: self.bmi_over_30,
        };
        Answers::new(&self.priorities(), self.lifestyle, medical, self.plans)
    }

    /// Rebuild the form from stored answers so a revisit shows the
    /// previous selections.
    pub fn from_answers(answers: &Answers) -> Self {
        let medical = answers.medical();
        Self {
            low_maintenance: answers.has_priority(Priority::LowMaintenance),
            hormone_free: answers.has_priority(Priority::HormoneFree),
            regulating_periods: answers.has_priority(Priority::RegulatingPeriods),
            improving_acne_mood: answers.has_priority(Priority::ImprovingAcneMood),
            short_term_flexibility: answers.has_priority(Priority::ShortTermFlexibility),
            cost: answers.has_priority(Priority::Cost),
            lifestyle: answers.lifestyle(),
            smoker_over_35: medical.smoker_over_35,
            migraine_aura: medical.migraine_aura,
            vte_risk: medical.vte_risk,
            bmi_over_30: medical.bmi_over_30,
            plans: answers.plans(),
        }
    }

    /// Radio button helper for templates.
    #[must_use]
    pub fn lifestyle_is(&self, value: &str) -> bool {
        self.lifestyle.as_str() == value
    }

    /// Radio button helper for templates.
    #[must_use]
    pub fn plans_is(&self, value: &str) -> bool {
        self.plans.as_str() == value
    }
}

/// Quiz form page template.
#[derive(Template, WebTemplate)]
#[template(path = "quiz/form.html")]
pub struct QuizFormTemplate {
    pub form: QuizForm,
    pub error: Option<String>,
}

/// Results page template.
///
/// Shared with the consultation handlers, which re-render the results
/// page with the contact form in its open, failed, or acknowledged
/// state.
#[derive(Template, WebTemplate)]
#[template(path = "quiz/results.html")]
pub struct ResultsTemplate {
    pub estrogen_warning: bool,
    pub recommendations: Vec<Recommendation>,
    pub catalog: &'static [Product],
    pub contact_open: bool,
    pub contact_form: ConsultationForm,
    pub contact_error: Option<String>,
    pub contact_submitted: bool,
}

impl ResultsTemplate {
    /// Results view for an evaluation, with an untouched contact form.
    #[must_use]
    pub fn new(evaluation: Evaluation, contact_open: bool) -> Self {
        Self {
            estrogen_warning: evaluation.estrogen_warning,
            recommendations: evaluation.recommendations,
            catalog: &CATALOG,
            contact_open,
            contact_form: ConsultationForm::default(),
            contact_error: None,
            contact_submitted: false,
        }
    }
}

/// Quiz form page.
///
/// A first visit marks the session as in-quiz; a revisit repopulates the
/// form from the stored answers.
#[instrument(skip_all)]
pub async fn form_page(session: Session) -> Result<Response, AppError> {
    let mut quiz = load_quiz(&session).await;
    if quiz.screen == Screen::Landing {
        quiz.screen = Screen::Quiz;
        save_quiz(&session, &quiz).await?;
    }

    let form = quiz
        .answers
        .as_ref()
        .map_or_else(QuizForm::default, QuizForm::from_answers);
    Ok(QuizFormTemplate { form, error: None }.into_response())
}

/// Quiz submission.
///
/// A submission with no priority checked re-renders the form inline with
/// the other selections kept.
#[instrument(skip_all)]
pub async fn submit(session: Session, Form(form): Form<QuizForm>) -> Result<Response, AppError> {
    match form.to_answers() {
        Ok(answers) => {
            add_breadcrumb("quiz", "Quiz submitted", None);
            let quiz = QuizSession {
                screen: Screen::Results,
                answers: Some(answers),
            };
            save_quiz(&session, &quiz).await?;
            Ok(Redirect::to("/quiz/results").into_response())
        }
        Err(AnswersError::EmptyPriorities) => {
            tracing::debug!("Quiz submitted without a priority");
            Ok(QuizFormTemplate {
                form,
                error: Some(PRIORITIES_REQUIRED_MESSAGE.to_string()),
            }
            .into_response())
        }
    }
}

/// Results page.
///
/// Visitors without stored answers are redirected to the quiz form by
/// the extractor.
#[instrument(skip_all)]
pub async fn results(quiz: RequireAnswers) -> ResultsTemplate {
    let evaluation = evaluate(&quiz.answers);
    ResultsTemplate::new(evaluation, quiz.screen == Screen::ContactOpen)
}
