//! Recommendation rule evaluation command.
//!
//! # Usage
//!
//! ```bash
//! # A hormone-free, cost-conscious answer set
//! petal evaluate -p hormone-free -p cost --lifestyle somewhat-consistent --plans no
//!
//! # A profile where estrogen is contraindicated
//! petal evaluate -p regulating-periods --migraine-aura
//! ```
//!
//! Lets the clinical team check what a given answer set produces without
//! clicking through the quiz.

use petal_core::{
    Answers, AnswersError, Lifestyle, MedicalFlags, PregnancyPlans, Priority, evaluate,
};
use thiserror::Error;

/// Errors that can occur while evaluating an answer set.
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// A priority, lifestyle, or plans argument did not parse.
    #[error("{0}")]
    InvalidAnswer(String),

    /// The parsed answer set was rejected.
    #[error("Invalid answers: {0}")]
    Answers(#[from] AnswersError),
}

/// Run an answer set through the recommendation rules and print the result.
pub fn run(
    priorities: &[String],
    lifestyle: &str,
    plans: &str,
    medical: MedicalFlags,
) -> Result<(), EvaluateError> {
    let priorities = priorities
        .iter()
        .map(|value| value.parse::<Priority>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(EvaluateError::InvalidAnswer)?;
    let lifestyle: Lifestyle = lifestyle.parse().map_err(EvaluateError::InvalidAnswer)?;
    let plans: PregnancyPlans = plans.parse().map_err(EvaluateError::InvalidAnswer)?;

    let answers = Answers::new(&priorities, lifestyle, medical, plans)?;
    let evaluation = evaluate(&answers);

    #[allow(clippy::print_stdout)]
    {
        if evaluation.estrogen_warning {
            println!("Note: estrogen-containing methods are excluded for this profile.");
            println!();
        }
        println!("Recommendations:");
        for rec in &evaluation.recommendations {
            println!("  {}", rec.label());
            println!("      {}", rec.description());
        }
    }

    Ok(())
}
