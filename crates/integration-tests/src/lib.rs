//! Integration tests for Petal.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the finder
//! cargo run -p petal-finder
//!
//! # Run integration tests
//! cargo test -p petal-integration-tests -- --ignored
//! ```
//!
//! The tests in `tests/` drive a running finder over HTTP with a
//! cookie-holding client, covering the quiz flow end to end. They are
//! `#[ignore]`d by default so a plain `cargo test` stays self-contained.
