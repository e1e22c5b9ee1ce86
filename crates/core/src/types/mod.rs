//! Core types for Petal.
//!
//! This module provides validated wrappers for the data the finder collects.

pub mod answers;
pub mod consultation;

pub use answers::{Answers, AnswersError, Lifestyle, MedicalFlags, PregnancyPlans, Priority};
pub use consultation::{ConsultationError, ConsultationRequest};
