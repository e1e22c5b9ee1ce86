//! Petal Core - Shared types and the recommendation engine.
//!
//! This crate provides the domain model used across all Petal components:
//! - `finder` - Public-facing birth control finder web app
//! - `cli` - Command-line tools for inspecting the catalog and rule table
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no sessions. A quiz submission becomes an [`Answers`] value, and
//! [`engine::evaluate`] turns it into an ordered list of recommendations.
//! This keeps the rule table testable in isolation and usable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated quiz answers and consultation request types
//! - [`catalog`] - The fixed set of birth control products we present
//! - [`engine`] - The rule table that maps answers to recommendations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod engine;
pub mod types;

pub use catalog::{CATALOG, Product, ProductId};
pub use engine::{Evaluation, Recommendation, evaluate};
pub use types::*;
