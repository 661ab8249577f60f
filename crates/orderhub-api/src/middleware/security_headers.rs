//! Hardening headers added to every response.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

use orderhub_core::config::ServerConfig;

/// Pre-parsed header set applied by [`security_headers`].
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl SecurityHeaders {
    /// Build the header set for the configured environment.
    ///
    /// `Strict-Transport-Security` is only sent outside development.
    pub fn from_config(config: &ServerConfig) -> Self {
        let mut headers = vec![
            (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
            (
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
            (
                header::X_XSS_PROTECTION,
                HeaderValue::from_static("1; mode=block"),
            ),
            (
                header::REFERRER_POLICY,
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ),
            (
                HeaderName::from_static("permissions-policy"),
                HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
            ),
        ];

        let configured = [
            (
                header::CONTENT_SECURITY_POLICY,
                &config.security_headers.content_security_policy,
                true,
            ),
            (
                header::STRICT_TRANSPORT_SECURITY,
                &config.security_headers.strict_transport_security,
                !config.is_development(),
            ),
        ];
        for (name, value, enabled) in configured {
            if !enabled || value.is_empty() {
                continue;
            }
            match HeaderValue::from_str(value) {
                Ok(value) => headers.push((name, value)),
                Err(_) => tracing::warn!(header = %name, "Ignoring invalid security header value"),
            }
        }

        Self { headers }
    }
}

/// Adds the configured security headers to the response.
pub async fn security_headers(
    State(headers): State<Arc<SecurityHeaders>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let target = response.headers_mut();
    for (name, value) in &headers.headers {
        target.insert(name.clone(), value.clone());
    }
    response
}
