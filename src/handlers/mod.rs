//! Route handlers.
//!
//! Each handler is registered for every method on its path and runs the same
//! short gate first:
//!
//! 1. `OPTIONS` → `204 No Content`
//! 2. anything but `GET`/`HEAD` → `405` with `Method not allowed`
//! 3. otherwise build the body, which `HEAD` then omits
//!
//! Handlers apply the CORS policy themselves as well. The
//! [`security_headers`](crate::middleware::security_headers) layer applies it
//! again, which is harmless since the policy is idempotent.

use http::header::ALLOW;
use http::{HeaderValue, Method, StatusCode};

use crate::cors;
use crate::request::Request;
use crate::response::Response;

mod health;
mod info;

pub use health::healthz;
pub use info::{APP_NAME, APP_VERSION, ENV_VAR, InfoPayload, info};

/// Answers a CORS preflight for any path.
pub async fn preflight(_req: Request) -> Response {
    Response::status(StatusCode::NO_CONTENT)
}

/// Methods the handlers in this module answer.
pub const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Steps 1 and 2 of the gate. `None` means the request is a GET or HEAD.
fn gate(req: &Request) -> Option<Response> {
    match *req.method() {
        Method::OPTIONS => Some(Response::status(StatusCode::NO_CONTENT)),
        Method::GET | Method::HEAD => None,
        _ => Some(
            Response::builder()
                .status(StatusCode::METHOD_NOT_ALLOWED)
                .header(ALLOW, HeaderValue::from_static(ALLOWED_METHODS))
                .text("Method not allowed"),
        ),
    }
}

fn with_cors(req: &Request, mut res: Response) -> Response {
    cors::apply(req.header("origin"), res.headers_mut());
    res
}
