//! The KinGraph route table.
//!
//! | Method | Path | Answer |
//! |---|---|---|
//! | GET, HEAD | `/healthz` | liveness, `ok` |
//! | GET, HEAD | `/api/v1/info` | name, version, env as JSON |
//! | OPTIONS | any path | `204` preflight |
//! | other | `/healthz`, `/api/v1/info` | `405` |
//! | any | anything else | `404` |

use http::Method;

use crate::handlers;
use crate::middleware;
use crate::router::Router;

/// Builds the full application: routes wrapped in the access log, then the
/// security headers.
pub fn new_router() -> Router {
    Router::new()
        .any("/healthz", handlers::healthz)
        .any("/api/v1/info", handlers::info)
        .on(Method::OPTIONS, "/", handlers::preflight)
        .on(Method::OPTIONS, "/{*path}", handlers::preflight)
        .layer(middleware::access_log)
        .layer(middleware::security_headers)
}
