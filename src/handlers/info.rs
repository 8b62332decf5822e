//! Build and deployment metadata.

use http::{Method, StatusCode};
use serde::Serialize;
use tracing::error;

use super::{gate, with_cors};
use crate::request::Request;
use crate::response::{ContentType, Response};

pub const APP_NAME: &str = "KinGraph";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Names the deployment environment reported in [`InfoPayload::env`].
pub const ENV_VAR: &str = "KIN_GRAPH_ENV";

/// Body of `GET /api/v1/info`. `env` serializes as `null` when unset.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InfoPayload {
    pub name: &'static str,
    pub version: &'static str,
    pub env: Option<String>,
}

impl InfoPayload {
    /// An empty `env` counts as unset.
    pub fn new(env: Option<String>) -> Self {
        Self {
            name: APP_NAME,
            version: APP_VERSION,
            env: env.filter(|e| !e.is_empty()),
        }
    }

    /// Reads [`ENV_VAR`] now. Values that are not valid Unicode count as unset.
    pub fn from_env() -> Self {
        Self::new(std::env::var(ENV_VAR).ok())
    }
}

/// `GET /api/v1/info` → `200` with the [`InfoPayload`] as JSON.
pub async fn info(req: Request) -> Response {
    let res = gate(&req).unwrap_or_else(|| render(&req, &InfoPayload::from_env()));
    with_cors(&req, res)
}

fn render(req: &Request, payload: &impl Serialize) -> Response {
    if *req.method() == Method::HEAD {
        return Response::builder().content_type(ContentType::Json).no_body();
    }
    match serde_json::to_vec(payload) {
        Ok(body) => Response::json(body),
        Err(e) => {
            error!(error = %e, "info: failed to encode response");
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .text("Internal server error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method) -> Request {
        let (parts, ()) = http::Request::builder()
            .method(method)
            .uri("/api/v1/info")
            .body(())
            .unwrap()
            .into_parts();
        Request::from_parts(parts)
    }

    #[test]
    fn empty_env_is_unset() {
        assert_eq!(InfoPayload::new(Some(String::new())).env, None);
        assert_eq!(InfoPayload::new(None).env, None);
        assert_eq!(InfoPayload::new(Some("prod".into())).env.as_deref(), Some("prod"));
    }

    #[test]
    fn version_is_the_package_version() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn field_order_and_null_env() {
        let json = serde_json::to_string(&InfoPayload::new(None)).unwrap();
        assert_eq!(json, r#"{"name":"KinGraph","version":"0.1.0","env":null}"#);
    }

    #[test]
    fn renders_json_for_get() {
        let payload = InfoPayload::new(Some("staging".into()));
        let res = render(&request(Method::GET), &payload);
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.header("content-type"), Some("application/json; charset=utf-8"));
        assert_eq!(res.body(), br#"{"name":"KinGraph","version":"0.1.0","env":"staging"}"#);
    }

    #[test]
    fn renders_headers_only_for_head() {
        let res = render(&request(Method::HEAD), &InfoPayload::new(None));
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.header("content-type"), Some("application/json; charset=utf-8"));
        assert!(res.body().is_empty());
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refuses to encode"))
        }
    }

    #[test]
    fn encode_failure_is_500() {
        let res = render(&request(Method::GET), &Unencodable);
        assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.header("content-type"), Some("text/plain; charset=utf-8"));
        assert_eq!(res.body(), b"Internal server error");
    }

    #[test]
    fn head_skips_encoding() {
        let res = render(&request(Method::HEAD), &Unencodable);
        assert_eq!(res.status_code(), StatusCode::OK);
        assert!(res.body().is_empty());
    }

    #[tokio::test]
    async fn rejects_writes() {
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let res = info(request(method)).await;
            assert_eq!(res.status_code(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(res.header("allow"), Some("GET, HEAD, OPTIONS"));
        }
    }

    #[tokio::test]
    async fn options_is_no_content() {
        let res = info(request(Method::OPTIONS)).await;
        assert_eq!(res.status_code(), StatusCode::NO_CONTENT);
        assert!(res.body().is_empty());
    }
}
