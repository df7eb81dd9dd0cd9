//! Handler and middleware traits.
//!
//! A handler is an asynchronous function from a request to a response. A
//! middleware is a function from handler to handler: it receives the handler
//! it wraps and returns a new one, and is itself responsible for invoking
//! the inner handler (or not).

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use http::Request;

use crate::{Error, Response};

/// An asynchronous request handler.
///
/// Implemented for any `Fn(Request<B>)` returning a future of
/// `Result<Response, Error>`, so plain `async fn`s and async closures
/// can be registered directly:
///
/// ```rust
/// use http::Request;
/// use trailhead::{Body, Error, Response, Router};
///
/// async fn index(_: Request<Body>) -> Result<Response, Error> {
///     Ok(Response::new(Body::from("Hello, World!")))
/// }
///
/// let mut router = Router::new();
/// router.get("/", index);
/// ```
pub trait Handler<B>: Send + Sync {
    /// Processes the request and returns the response asynchronously.
    fn call(&self, req: Request<B>) -> BoxFuture<'static, Result<Response, Error>>;
}

impl<B, F, Fut> Handler<B> for F
where
    F: Fn(Request<B>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Response, Error>> + Send + 'static,
{
    fn call(&self, req: Request<B>) -> BoxFuture<'static, Result<Response, Error>> {
        Box::pin(self(req))
    }
}

/// A shared, type-erased [`Handler`].
///
/// Handlers are reference counted so middleware can wrap them per dispatch
/// without cloning the handler itself.
pub type ArcHandler<B> = Arc<dyn Handler<B>>;

/// A handler-wrapping function.
///
/// Implemented for any `Fn(ArcHandler<B>) -> ArcHandler<B>`. The returned
/// handler decides when, and whether, to invoke the one it was given; there
/// is no separate "call next" primitive.
///
/// ```rust
/// use std::sync::Arc;
///
/// use http::Request;
/// use trailhead::{ArcHandler, Body, Router};
///
/// fn logger(next: ArcHandler<Body>) -> ArcHandler<Body> {
///     Arc::new(move |req: Request<Body>| {
///         let next = next.clone();
///         async move {
///             println!("--> {} {}", req.method(), req.uri().path());
///             next.call(req).await
///         }
///     })
/// }
///
/// let mut router = Router::new();
/// router.wrap(logger);
/// ```
pub trait Middleware<B>: Send + Sync {
    /// Wraps `next`, returning the handler to invoke in its place.
    fn wrap(&self, next: ArcHandler<B>) -> ArcHandler<B>;
}

impl<B, F> Middleware<B> for F
where
    F: Fn(ArcHandler<B>) -> ArcHandler<B> + Send + Sync,
{
    fn wrap(&self, next: ArcHandler<B>) -> ArcHandler<B> {
        self(next)
    }
}
