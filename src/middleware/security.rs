use http::header::{
    CONTENT_SECURITY_POLICY as CSP, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
};
use http::HeaderValue;

use super::Next;
use crate::cors;
use crate::request::Request;
use crate::response::Response;

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self'; \
    style-src 'self' 'unsafe-inline'; img-src 'self' data:; font-src 'self'; \
    frame-ancestors 'none'; base-uri 'self'";

/// Sets the fixed hardening headers and the CORS policy on every response,
/// whatever produced it.
pub async fn security_headers(req: Request, next: Next) -> Response {
    let origin = req.header("origin").map(str::to_owned);

    let mut res = next.run(req).await;

    let headers = res.headers_mut();
    cors::apply(origin.as_deref(), headers);
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("strict-origin-when-cross-origin"));
    headers.insert(CSP, HeaderValue::from_static(CONTENT_SECURITY_POLICY));
    res
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use http::{Method, StatusCode};

    use super::*;
    use crate::Router;

    async fn teapot(_req: Request) -> Response {
        Response::builder().status(StatusCode::IM_A_TEAPOT).text("short and stout")
    }

    fn app() -> Arc<Router> {
        Arc::new(Router::new().on(Method::GET, "/pot", teapot).layer(security_headers))
    }

    #[test]
    fn policy_is_a_single_line() {
        assert!(!CONTENT_SECURITY_POLICY.contains("  "));
        assert!(CONTENT_SECURITY_POLICY.starts_with("default-src 'self'; script-src 'self'; style-src"));
        assert!(CONTENT_SECURITY_POLICY.ends_with("frame-ancestors 'none'; base-uri 'self'"));
    }

    #[tokio::test]
    async fn headers_land_on_handler_responses() {
        let req = http::Request::builder().uri("/pot").body(()).unwrap();

        let res = app().handle(req).await;

        assert_eq!(res.status_code(), StatusCode::IM_A_TEAPOT);
        assert_eq!(res.header("x-content-type-options"), Some("nosniff"));
        assert_eq!(res.header("x-frame-options"), Some("DENY"));
        assert_eq!(res.header("referrer-policy"), Some("strict-origin-when-cross-origin"));
        assert_eq!(res.header("content-security-policy"), Some(CONTENT_SECURITY_POLICY));
        assert_eq!(res.header("access-control-allow-origin"), None);
    }

    #[tokio::test]
    async fn cors_applies_to_unmatched_paths() {
        let req = http::Request::builder()
            .uri("/nowhere")
            .header("origin", "http://localhost:4200")
            .body(())
            .unwrap();

        let res = app().handle(req).await;

        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(res.header("access-control-allow-origin"), Some("http://localhost:4200"));
        assert_eq!(res.header("vary"), Some("Origin"));
    }
}
