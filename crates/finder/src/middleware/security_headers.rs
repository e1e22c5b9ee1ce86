//! Security headers for every response.
//!
//! The finder ships no scripts and talks to no third-party origins, so
//! the whole policy can be pinned as a fixed header table. Health
//! answers pass through this app; the caching and referrer headers
//! matter as much as the script policy.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Every hardening header the finder sends.
///
/// - The CSP allows self-hosted styles, fonts, and images, and nothing
///   else; there is no `script-src` because no page loads a script
/// - `Cache-Control: no-store` keeps rendered quiz answers out of
///   shared caches (the hashed static assets are served past this
///   middleware and stay cacheable)
/// - `Referrer-Policy: no-referrer` so results URLs never leak outward
/// - The cross-origin trio plus `X-Frame-Options` opt into full
///   process isolation and block framing
/// - `Permissions-Policy` denies every sensitive browser feature
const SECURITY_HEADERS: [(&str, &str); 10] = [
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "no-referrer"),
    (
        "content-security-policy",
        "default-src 'none'; style-src 'self'; font-src 'self'; img-src 'self'; \
         connect-src 'self'; frame-src 'none'; object-src 'none'; base-uri 'self'; \
         form-action 'self'; frame-ancestors 'none'; upgrade-insecure-requests",
    ),
    (
        "permissions-policy",
        "accelerometer=(), ambient-light-sensor=(), autoplay=(), battery=(), \
         browsing-topics=(), camera=(), display-capture=(), document-domain=(), \
         encrypted-media=(), fullscreen=(), geolocation=(), gyroscope=(), hid=(), \
         idle-detection=(), interest-cohort=(), magnetometer=(), microphone=(), \
         midi=(), payment=(), picture-in-picture=(), publickey-credentials-get=(), \
         screen-wake-lock=(), serial=(), sync-xhr=(), usb=(), web-share=(), \
         xr-spatial-tracking=()",
    ),
    ("cache-control", "no-store, max-age=0"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("cross-origin-embedder-policy", "require-corp"),
    ("x-dns-prefetch-control", "off"),
];

/// Apply [`SECURITY_HEADERS`] to the response.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    // from_static panics on malformed input, so constructing each pair
    // is the whole assertion
    #[test]
    fn test_header_table_is_well_formed() {
        let mut seen: Vec<&str> = Vec::new();
        for (name, value) in SECURITY_HEADERS {
            assert!(!seen.contains(&name), "duplicate header {name}");
            seen.push(name);
            let _ = HeaderName::from_static(name);
            let _ = HeaderValue::from_static(value);
        }
    }

    #[test]
    fn test_csp_has_no_script_source() {
        let (_, csp) = SECURITY_HEADERS
            .iter()
            .find(|(name, _)| *name == "content-security-policy")
            .copied()
            .unwrap_or(("", ""));
        assert!(csp.starts_with("default-src 'none'"));
        assert!(!csp.contains("script-src"));
        assert!(!csp.contains("unsafe-inline"));
    }
}
