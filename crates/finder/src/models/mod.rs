//! Domain models for the finder.

pub mod session;

pub use session::{QuizSession, Screen, keys};
