//! Handler trait and type erasure.
//!
//! # Why handlers are boxed
//!
//! `healthz` and `info` are two different `async fn` items, so they have two
//! different types, and so do the futures they return. The router keeps them
//! in the same matchit trees, which can only hold one type. The fix is a
//! trait object: every handler is wrapped in a small struct that implements
//! [`ErasedHandler`], and the tree stores `Arc<dyn ErasedHandler>`.
//!
//! ```text
//! async fn healthz(req: Request) -> Response { … }   ← what you write
//!        ↓ router.any("/healthz", healthz)
//! healthz.into_boxed_handler()                       ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(healthz))                       ← stored as BoxedHandler
//!        ↓
//! handler.call(req)                                  ← one vtable call per request
//!        ↓
//! Box::pin(async { healthz(req).await.into_response() })
//! ```
//!
//! Per request that costs one `Arc` clone, one virtual call, and one boxed
//! future. All three are noise next to a socket write.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A boxed future that yields a [`Response`].
///
/// It is pinned because an `async` block may hold references into itself,
/// so it must stay put once polled. `Send + 'static` lets hyper's executor
/// move it to any worker thread.
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Object-safe face of a handler. The router only ever talks to this.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)`: it appears in the signature
/// of the public [`Handler::into_boxed_handler`], but nothing outside the
/// crate has a reason to call it.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A handler shared by every connection task. Cloning it bumps a refcount.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Implemented for every valid route handler.
///
/// You never implement it by hand. Any function with this shape qualifies:
///
/// ```text
/// async fn name(req: Request) -> impl IntoResponse
/// ```
///
/// The trait is sealed through the private `Sealed` supertrait. Outside code
/// cannot name `Sealed`, so the blanket impl below is the only one there will
/// ever be, and the trait can grow without breaking anybody.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

/// `Fn(Request) -> Fut` covers named `async fn` items and closures that
/// return an `async` block.
impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

/// Holds the concrete function and bridges it to [`ErasedHandler`].
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        // The handler's own return type is erased here: whatever it yields
        // goes through `IntoResponse`, then the whole future is boxed.
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
