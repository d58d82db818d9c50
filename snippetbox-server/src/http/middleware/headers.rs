//! Fixed security headers on every response

use async_trait::async_trait;
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::response::Response;

use crate::http::pipeline::{Interceptor, Next};

/// Header names and values set on every response.
pub const SECURITY_HEADERS: [(&str, &str); 9] = [
    ("x-dns-prefetch-control", "off"),
    ("x-content-type-options", "nosniff"),
    // 60 days
    ("strict-transport-security", "max-age=5184000; includeSubDomains"),
    ("x-download-options", "noopen"),
    ("x-robots-tag", "none"),
    ("referrer-policy", "origin-when-cross-origin"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "1; mode=block"),
    ("x-frame-options", "deny"),
];

/// Write [`SECURITY_HEADERS`] into `headers`, replacing existing values.
pub fn apply_security_headers(headers: &mut HeaderMap) {
    for (name, value) in SECURITY_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
}

/// Sets [`SECURITY_HEADERS`], overwriting anything a handler chose.
///
/// A panic further in unwinds past this stage; [`Recovery`] writes the same
/// headers onto the 500 it renders.
///
/// [`Recovery`]: super::Recovery
pub struct SecurityHeaders;

#[async_trait]
impl Interceptor for SecurityHeaders {
    fn name(&self) -> &'static str {
        "security_headers"
    }

    async fn handle(&self, req: Request, next: Next) -> Response {
        let mut response = next.run(req).await;
        apply_security_headers(response.headers_mut());
        response
    }
}
