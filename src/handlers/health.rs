//! Liveness probe.
//!
//! If the process can answer HTTP at all, it is alive. There is no readiness
//! probe: nothing here has dependencies to warm up.

use http::Method;

use super::{gate, with_cors};
use crate::request::Request;
use crate::response::{ContentType, Response};

/// `GET /healthz` → `200 ok`. `HEAD` gets the same status and headers, no body.
pub async fn healthz(req: Request) -> Response {
    let res = gate(&req).unwrap_or_else(|| {
        if *req.method() == Method::HEAD {
            Response::builder().content_type(ContentType::Text).no_body()
        } else {
            Response::text("ok")
        }
    });
    with_cors(&req, res)
}
