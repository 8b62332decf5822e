//! Radix-tree request router.
//!
//! One tree per HTTP method, plus one method-agnostic tree for handlers that
//! make their own method decisions. O(path-length) lookup. Middleware layers
//! wrap dispatch, so they run for matched and unmatched requests alike.

use std::collections::HashMap;
use std::sync::Arc;

use http::header::ALLOW;
use http::{HeaderValue, Method, StatusCode};
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::middleware::{BoxedMiddleware, Middleware, Next};
use crate::request::Request;
use crate::response::Response;

/// The application router.
///
/// Build it once at startup, then hand it to [`Server::serve`](crate::Server::serve).
/// Every builder method returns `self`, so registrations chain:
///
/// ```rust
/// use http::Method;
/// use kingraph::{Request, Response, Router, middleware};
///
/// # async fn healthz(_: Request) -> Response { Response::text("ok") }
/// # async fn preflight(_: Request) -> Response { Response::text("") }
/// Router::new()
///     .any("/healthz", healthz)
///     .on(Method::OPTIONS, "/{*path}", preflight)
///     .layer(middleware::access_log);
/// ```
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    any: MatchitRouter<BoxedHandler>,
    pub(crate) layers: Vec<BoxedMiddleware>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), any: MatchitRouter::new(), layers: Vec::new() }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Paths use matchit syntax: `{name}` for a segment, `{*name}` for the rest.
    ///
    /// # Panics
    ///
    /// Panics if the path is malformed or conflicts with an earlier route.
    /// Routes are fixed at startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Register a handler for a path under every method. Method-specific
    /// routes registered with [`on`](Router::on) win over this one.
    ///
    /// # Panics
    ///
    /// Same as [`on`](Router::on).
    pub fn any(mut self, path: &str, handler: impl Handler) -> Self {
        self.any
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Wrap the router in a middleware. The first layer added is the outermost.
    pub fn layer(mut self, middleware: impl Middleware) -> Self {
        self.layers.push(middleware.into_boxed_middleware());
        self
    }

    /// Runs one request through the layers and the route table.
    ///
    /// The request body is dropped unread.
    pub async fn handle<B>(self: &Arc<Self>, req: http::Request<B>) -> Response {
        let (parts, body) = req.into_parts();
        drop(body);
        Next::new(Arc::clone(self)).run(Request::from_parts(parts)).await
    }

    pub(crate) async fn dispatch(&self, mut req: Request) -> Response {
        match self.lookup(req.method(), req.path()) {
            Some((handler, params)) => {
                req.params = params;
                handler.call(req).await
            }
            None => match self.allowed_methods(req.path()) {
                Some(allow) => Response::builder()
                    .status(StatusCode::METHOD_NOT_ALLOWED)
                    .header(ALLOW, allow)
                    .text("Method not allowed"),
                None => Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .text("404 page not found"),
            },
        }
    }

    fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let matched = self
            .routes
            .get(method)
            .and_then(|tree| tree.at(path).ok())
            .or_else(|| self.any.at(path).ok())?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// The `Allow` value for `path`, or `None` if no method other than
    /// OPTIONS routes it. OPTIONS alone does not count because a preflight
    /// catch-all matches every path.
    fn allowed_methods(&self, path: &str) -> Option<HeaderValue> {
        let mut methods: Vec<&str> = self.routes
            .iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(method, _)| method.as_str())
            .collect();
        if methods.iter().all(|m| *m == Method::OPTIONS.as_str()) {
            return None;
        }
        methods.sort_unstable();
        HeaderValue::from_str(&methods.join(", ")).ok()
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
