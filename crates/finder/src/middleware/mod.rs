//! HTTP middleware stack for the finder.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions with in-memory store)
//! 5. Security headers (CSP, isolation, etc.)
//! 6. Rate limiting (governor, consultation routes only)

pub mod rate_limit;
pub mod request_id;
pub mod screen;
pub mod security_headers;
pub mod session;

pub use rate_limit::contact_rate_limiter;
pub use request_id::request_id_middleware;
pub use screen::{RequireAnswers, load_quiz, reset_quiz, save_quiz};
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
