//! Middleware layer.
//!
//! Middleware wraps the whole router, so it sees every request, including the
//! ones that end in a 404 or 405 without reaching a handler. A middleware is
//! any async function of the form:
//!
//! ```text
//! async fn name(req: Request, next: Next) -> Response
//! ```
//!
//! It may inspect the request, call [`Next::run`] to produce the response,
//! then adjust the response on the way out. Layers run in the order they are
//! added with [`Router::layer`](crate::Router::layer): the first one added is
//! the outermost.
//!
//! Built-in middleware:
//! - [`access_log`]: one log line per request with method, path, status, latency
//! - [`security_headers`]: fixed browser hardening headers plus the dev CORS policy

use std::future::Future;
use std::sync::Arc;

use crate::handler::BoxFuture;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

mod access_log;
mod security;

pub use access_log::access_log;
pub use security::{CONTENT_SECURITY_POLICY, security_headers};

/// The rest of the chain: the remaining layers, then route dispatch.
pub struct Next {
    router: Arc<Router>,
    index: usize,
}

impl Next {
    pub(crate) fn new(router: Arc<Router>) -> Self {
        Self { router, index: 0 }
    }

    /// Runs the remaining layers and the matched handler.
    pub async fn run(self, req: Request) -> Response {
        let Some(layer) = self.router.layers.get(self.index).cloned() else {
            return self.router.dispatch(req).await;
        };
        let next = Next { router: self.router, index: self.index + 1 };
        layer.call(req, next).await
    }
}

#[doc(hidden)]
pub trait ErasedMiddleware {
    fn call(&self, req: Request, next: Next) -> BoxFuture;
}

#[doc(hidden)]
pub type BoxedMiddleware = Arc<dyn ErasedMiddleware + Send + Sync + 'static>;

/// Implemented for every `async fn(Request, Next) -> Response`. Sealed.
pub trait Middleware: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_middleware(self) -> BoxedMiddleware;
}

mod private {
    pub trait Sealed {}
}

impl<F, Fut> private::Sealed for F
where
    F: Fn(Request, Next) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
}

impl<F, Fut> Middleware for F
where
    F: Fn(Request, Next) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    fn into_boxed_middleware(self) -> BoxedMiddleware {
        Arc::new(FnMiddleware(self))
    }
}

struct FnMiddleware<F>(F);

impl<F, Fut> ErasedMiddleware for FnMiddleware<F>
where
    F: Fn(Request, Next) -> Fut + Send + Sync,
    Fut: Future<Output = Response> + Send + 'static,
{
    fn call(&self, req: Request, next: Next) -> BoxFuture {
        Box::pin((self.0)(req, next))
    }
}
