//! Askama filters shared by every page template.

// Filter signatures are dictated by askama
#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Fingerprint of `static/css/main.css`, computed by the build script.
///
/// Templates link the stylesheet as `main.{{ ""|css_hash }}.css`, so the
/// asset name changes whenever the content does and the file can be
/// cached without an expiry.
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Current year, for the footer copyright line.
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
