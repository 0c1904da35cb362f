//! Security headers middleware.
//!
//! Every response carries a restrictive header set. The storefront serves
//! plain server-rendered HTML with one CDN script, so the policy can stay
//! close to fully locked down.

use axum::{
    extract::Request,
    http::{
        HeaderName, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

/// Content Security Policy.
///
/// `script-src` allows unpkg for the htmx runtime; everything else is
/// same-origin or denied. There is no inline script anywhere in the
/// templates, so `'unsafe-inline'` never appears.
const CSP: &str = "default-src 'none'; \
     script-src 'self' https://unpkg.com; \
     style-src 'self'; \
     font-src 'self'; \
     img-src 'self'; \
     connect-src 'self'; \
     frame-src 'none'; \
     object-src 'none'; \
     base-uri 'self'; \
     form-action 'self'; \
     frame-ancestors 'none'; \
     upgrade-insecure-requests";

/// Permissions Policy denying every browser feature an order form could
/// conceivably be tricked into using.
const PERMISSIONS_POLICY: &str = "camera=(), \
     display-capture=(), \
     fullscreen=(), \
     geolocation=(), \
     microphone=(), \
     midi=(), \
     payment=(), \
     publickey-credentials-get=(), \
     screen-wake-lock=(), \
     serial=(), \
     usb=(), \
     web-share=()";

/// Add security headers to all responses.
///
/// Besides the CSP and Permissions Policy above:
/// - `X-Frame-Options: DENY` and `frame-ancestors 'none'` prevent framing
/// - `X-Content-Type-Options: nosniff` prevents MIME sniffing
/// - `Referrer-Policy: no-referrer` leaks nothing on outbound navigation
/// - `Cache-Control: no-store` keeps order drafts and customer details out
///   of shared caches
/// - COOP/CORP `same-origin` plus COEP `credentialless` for isolation
///   (credentialless rather than require-corp because the htmx script from
///   unpkg ships no CORP headers)
/// - `X-DNS-Prefetch-Control: off`
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    headers.insert(CONTENT_SECURITY_POLICY, HeaderValue::from_static(CSP));

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(PERMISSIONS_POLICY),
    );

    headers.insert(
        HeaderName::from_static("cache-control"),
        HeaderValue::from_static("no-store, max-age=0"),
    );

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-resource-policy"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-embedder-policy"),
        HeaderValue::from_static("credentialless"),
    );

    headers.insert(
        HeaderName::from_static("x-dns-prefetch-control"),
        HeaderValue::from_static("off"),
    );

    response
}
